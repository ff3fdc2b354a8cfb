use axum::{
    Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;

use app::persistence::badges::{
    check_and_award, get_profile, list_badges, set_featured, user_badges,
};
use app::persistence::levels::get_or_create_level;
use app::state::AppState;
use models::schemas::badge::BadgeSchema;
use models::schemas::level::{LevelSchema, ProfileSchema};

use crate::ApiResponse;
use crate::error::ApiError;
use crate::extractor::{Json, UserId};

#[derive(Deserialize, Default)]
pub(crate) struct BadgeQuery {
    category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/achievements/badges",
    tag = "achievements",
    responses((status = 200, body = [BadgeSchema]))
)]
pub(crate) async fn badges_get(
    state: State<AppState>,
    Query(query): Query<BadgeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let badges = list_badges(&state.conn, query.category).await?;

    let result: Vec<BadgeSchema> = badges.into_iter().map(BadgeSchema::from).collect();
    Ok(Json(result))
}

#[utoipa::path(get, path = "/achievements/badges/me", tag = "achievements", responses((status = 200)))]
pub(crate) async fn my_badges_get(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let result = user_badges(&state.conn, user_id).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/achievements/check",
    tag = "achievements",
    responses((status = 200))
)]
pub(crate) async fn award_check_post(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let awarded = check_and_award(&state.conn, user_id).await?;

    let awarded: Vec<BadgeSchema> = awarded.into_iter().map(BadgeSchema::from).collect();
    let message = if awarded.is_empty() {
        "No new badges"
    } else {
        "New badges awarded"
    };
    Ok(Json(ApiResponse::success(message, Some(awarded))))
}

#[utoipa::path(
    post,
    path = "/achievements/badges/{id}/feature",
    tag = "achievements",
    responses((status = 200), (status = 404))
)]
pub(crate) async fn feature_badge_post(
    state: State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    set_featured(&state.conn, user_id, id).await?;

    Ok(Json(ApiResponse::<()>::success("Featured badge updated", None)))
}

#[utoipa::path(
    get,
    path = "/achievements/level",
    tag = "achievements",
    responses((status = 200, body = LevelSchema))
)]
pub(crate) async fn level_get(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let level = get_or_create_level(&state.conn, user_id).await?;

    Ok(Json(LevelSchema::from(level)))
}

#[utoipa::path(
    get,
    path = "/achievements/profile",
    tag = "achievements",
    responses((status = 200, body = ProfileSchema))
)]
pub(crate) async fn profile_get(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let profile = get_profile(&state.conn, user_id).await?;

    Ok(Json(profile))
}

pub fn create_achievement_router() -> Router<AppState> {
    Router::new()
        .route("/badges", get(badges_get))
        .route("/badges/me", get(my_badges_get))
        .route("/badges/{id}/feature", post(feature_badge_post))
        .route("/check", post(award_check_post))
        .route("/level", get(level_get))
        .route("/profile", get(profile_get))
}
