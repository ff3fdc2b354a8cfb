use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};

use app::persistence::sessions::{
    finish_session, list_sessions, recent_sessions, submit_session, user_stats,
};
use app::state::AppState;
use models::params::session::{CreateSessionParams, FinishSessionParams};
use models::queries::{PaginationQuery, session::SessionQuery};
use models::schemas::session::SessionSchema;

use crate::error::ApiError;
use crate::extractor::{Json, MaybeUserId, Valid};

#[utoipa::path(
    post,
    path = "/sessions",
    tag = "sessions",
    request_body = CreateSessionParams,
    responses((status = 201, body = SessionSchema), (status = 400))
)]
pub(crate) async fn sessions_post(
    state: State<AppState>,
    MaybeUserId(user_id): MaybeUserId,
    Valid(Json(params)): Valid<Json<CreateSessionParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let session = submit_session(&state.conn, user_id, params, state.config.utc_offset).await?;

    Ok((StatusCode::CREATED, Json(SessionSchema::from(session))))
}

#[utoipa::path(
    patch,
    path = "/sessions/{id}/finish",
    tag = "sessions",
    request_body = FinishSessionParams,
    responses((status = 200, body = SessionSchema), (status = 404))
)]
pub(crate) async fn sessions_finish_patch(
    state: State<AppState>,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<FinishSessionParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let session = finish_session(&state.conn, id, params).await?;

    Ok(Json(SessionSchema::from(session)))
}

#[utoipa::path(get, path = "/sessions", tag = "sessions", responses((status = 200)))]
pub(crate) async fn sessions_get(
    state: State<AppState>,
    MaybeUserId(user_id): MaybeUserId,
    Query(query): Query<SessionQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = list_sessions(&state.conn, user_id, query, pagination).await?;

    Ok(Json(result))
}

#[utoipa::path(get, path = "/sessions/recent", tag = "sessions", responses((status = 200)))]
pub(crate) async fn sessions_recent_get(
    state: State<AppState>,
    MaybeUserId(user_id): MaybeUserId,
    Query(query): Query<SessionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = recent_sessions(&state.conn, user_id, query.guest_session_id).await?;

    Ok(Json(result))
}

#[utoipa::path(get, path = "/sessions/stats", tag = "sessions", responses((status = 200)))]
pub(crate) async fn sessions_stats_get(
    state: State<AppState>,
    MaybeUserId(user_id): MaybeUserId,
    Query(query): Query<SessionQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = user_stats(&state.conn, user_id, query.guest_session_id).await?;

    Ok(Json(result))
}

pub fn create_session_router() -> Router<AppState> {
    Router::new()
        .route("/", post(sessions_post).get(sessions_get))
        .route("/recent", get(sessions_recent_get))
        .route("/stats", get(sessions_stats_get))
        .route("/{id}/finish", patch(sessions_finish_patch))
}
