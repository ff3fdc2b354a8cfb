use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};

use app::persistence::goals::{create_goal, deactivate_goal, goal_progress, list_goals};
use app::state::AppState;
use models::params::goal::CreateGoalParams;
use models::schemas::goal::{GoalProgressSchema, GoalSchema};

use crate::error::ApiError;
use crate::extractor::{Json, UserId, Valid};

#[utoipa::path(
    post,
    path = "/goals",
    tag = "goals",
    request_body = CreateGoalParams,
    responses((status = 201, body = GoalSchema))
)]
pub(crate) async fn goals_post(
    state: State<AppState>,
    UserId(user_id): UserId,
    Valid(Json(params)): Valid<Json<CreateGoalParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let goal = create_goal(&state.conn, user_id, params).await?;

    Ok((StatusCode::CREATED, Json(GoalSchema::from(goal))))
}

#[utoipa::path(get, path = "/goals", tag = "goals", responses((status = 200, body = [GoalSchema])))]
pub(crate) async fn goals_get(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let goals = list_goals(&state.conn, user_id).await?;

    let result: Vec<GoalSchema> = goals.into_iter().map(GoalSchema::from).collect();
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/goals/progress",
    tag = "goals",
    responses((status = 200, body = [GoalProgressSchema]))
)]
pub(crate) async fn goals_progress_get(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let result = goal_progress(&state.conn, user_id, state.config.local_today()).await?;

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/goals/{id}",
    tag = "goals",
    responses((status = 200, body = GoalSchema), (status = 404))
)]
pub(crate) async fn goals_delete(
    state: State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let goal = deactivate_goal(&state.conn, user_id, id).await?;

    Ok(Json(GoalSchema::from(goal)))
}

pub fn create_goal_router() -> Router<AppState> {
    Router::new()
        .route("/", post(goals_post).get(goals_get))
        .route("/progress", get(goals_progress_get))
        .route("/{id}", delete(goals_delete))
}
