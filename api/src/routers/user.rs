use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use app::error::CoreError;
use app::persistence::users::{create_user, get_user};
use app::state::AppState;
use models::params::user::CreateUserParams;
use models::schemas::user::UserSchema;

use crate::error::ApiError;
use crate::extractor::{Json, Valid};

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserParams,
    responses((status = 201, body = UserSchema), (status = 409))
)]
pub(crate) async fn users_post(
    state: State<AppState>,
    Valid(Json(params)): Valid<Json<CreateUserParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = create_user(&state.conn, params).await?;

    Ok((StatusCode::CREATED, Json(UserSchema::from(user))))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    responses((status = 200, body = UserSchema), (status = 404))
)]
pub(crate) async fn users_id_get(
    state: State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let user = get_user(&state.conn, id).await?;

    user.map(|user| Json(UserSchema::from(user)))
        .ok_or_else(|| CoreError::not_found("User").into())
}

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(users_post))
        .route("/{id}", get(users_id_get))
}
