use axum::{
    Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};

use app::persistence::stats::{calendar, overview};
use app::persistence::streaks::get_or_create_streak;
use app::state::AppState;
use models::queries::stats::CalendarQuery;
use models::schemas::stats::{DailyStatSchema, StatsOverviewSchema};
use models::schemas::streak::StreakSchema;

use crate::error::ApiError;
use crate::extractor::{Json, UserId};

#[utoipa::path(
    get,
    path = "/stats/overview",
    tag = "stats",
    responses((status = 200, body = StatsOverviewSchema))
)]
pub(crate) async fn stats_overview_get(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let result = overview(&state.conn, user_id, state.config.local_today()).await?;

    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/stats/calendar",
    tag = "stats",
    responses((status = 200, body = [DailyStatSchema]))
)]
pub(crate) async fn stats_calendar_get(
    state: State<AppState>,
    UserId(user_id): UserId,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = calendar(&state.conn, user_id, query.start, query.end).await?;

    let result: Vec<DailyStatSchema> = stats.into_iter().map(DailyStatSchema::from).collect();
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/stats/streak",
    tag = "stats",
    responses((status = 200, body = StreakSchema))
)]
pub(crate) async fn stats_streak_get(
    state: State<AppState>,
    UserId(user_id): UserId,
) -> Result<impl IntoResponse, ApiError> {
    let streak = get_or_create_streak(&state.conn, user_id).await?;

    Ok(Json(StreakSchema::from(streak)))
}

pub fn create_stats_router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(stats_overview_get))
        .route("/calendar", get(stats_calendar_get))
        .route("/streak", get(stats_streak_get))
}
