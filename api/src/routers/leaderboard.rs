use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use app::error::CoreError;
use app::persistence::leaderboard::{
    build_snapshot, latest_snapshot, my_rank, snapshot_detail,
};
use app::state::AppState;
use models::domains::sea_orm_active_enums::{LanguageScope, SnapshotMode};
use models::params::snapshot::BuildSnapshotParams;
use models::queries::snapshot::SnapshotQuery;
use models::schemas::leaderboard::{MyRankSchema, SnapshotDetailSchema, SnapshotSchema};

use crate::error::ApiError;
use crate::extractor::{Json, UserId, Valid};

#[utoipa::path(
    get,
    path = "/leaderboard/latest",
    tag = "leaderboard",
    responses((status = 200, body = SnapshotDetailSchema), (status = 404))
)]
pub(crate) async fn leaderboard_latest_get(
    state: State<AppState>,
    Query(query): Query<SnapshotQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = latest_snapshot(&state.conn, query)
        .await?
        .ok_or_else(|| CoreError::not_found("Snapshot"))?;

    let result = snapshot_detail(&state.conn, snapshot.id).await?;
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/leaderboard/me",
    tag = "leaderboard",
    responses((status = 200, body = MyRankSchema), (status = 404))
)]
pub(crate) async fn leaderboard_me_get(
    state: State<AppState>,
    UserId(user_id): UserId,
    Query(query): Query<SnapshotQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let result = my_rank(&state.conn, user_id, query).await?;

    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/leaderboard/{id}",
    tag = "leaderboard",
    responses((status = 200, body = SnapshotDetailSchema), (status = 404))
)]
pub(crate) async fn leaderboard_id_get(
    state: State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let result = snapshot_detail(&state.conn, id).await?;

    Ok(Json(result))
}

/// Build-on-demand hook for the scheduled job and for admin rebuilds.
#[utoipa::path(
    post,
    path = "/leaderboard/build",
    tag = "leaderboard",
    request_body = BuildSnapshotParams,
    responses((status = 201, body = SnapshotSchema))
)]
pub(crate) async fn leaderboard_build_post(
    state: State<AppState>,
    Valid(Json(params)): Valid<Json<BuildSnapshotParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = build_snapshot(
        &state.conn,
        params.period,
        params.mode.unwrap_or(SnapshotMode::All),
        params.language.unwrap_or(LanguageScope::All),
        params.as_of.unwrap_or_else(|| state.config.local_today()),
        state.config.utc_offset,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(SnapshotSchema::from(snapshot))))
}

pub fn create_leaderboard_router() -> Router<AppState> {
    Router::new()
        .route("/latest", get(leaderboard_latest_get))
        .route("/me", get(leaderboard_me_get))
        .route("/build", post(leaderboard_build_post))
        .route("/{id}", get(leaderboard_id_get))
}
