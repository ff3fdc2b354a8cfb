use axum::Router;

pub mod achievement;
pub mod challenge;
pub mod goal;
pub mod leaderboard;
pub mod root;
pub mod session;
pub mod stats;
pub mod user;

use achievement::create_achievement_router;
use app::state::AppState;
use challenge::create_challenge_router;
use goal::create_goal_router;
use leaderboard::create_leaderboard_router;
use root::create_root_router;
use session::create_session_router;
use stats::create_stats_router;
use user::create_user_router;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_root_router())
        .nest("/users", create_user_router())
        .nest("/sessions", create_session_router())
        .nest("/stats", create_stats_router())
        .nest("/goals", create_goal_router())
        .nest("/challenges", create_challenge_router())
        .nest("/achievements", create_achievement_router())
        .nest("/leaderboard", create_leaderboard_router())
        .with_state(state)
}
