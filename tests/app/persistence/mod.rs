use chrono::{FixedOffset, NaiveDate};
use sea_orm::DatabaseConnection;

use models::domains::sea_orm_active_enums::{Language, PracticeMode};
use models::domains::users;
use models::params::session::CreateSessionParams;
use models::params::user::CreateUserParams;

mod badges;
mod challenges;
mod goals;
mod leaderboard;
mod levels;
mod sessions;
mod streaks;

pub(crate) fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) async fn test_db() -> DatabaseConnection {
    utils::testing::setup_test_db("sqlite::memory:")
        .await
        .expect("Set up db failed!")
}

pub(crate) async fn seed_user(db: &DatabaseConnection, username: &str) -> users::Model {
    app::persistence::users::create_user(
        db,
        CreateUserParams {
            username: username.to_string(),
            email: format!("{username}@example.com"),
        },
    )
    .await
    .expect("Create user failed!")
}

pub(crate) fn session_params(
    wpm: f64,
    accuracy: f64,
    language: Language,
    mode: PracticeMode,
    date: NaiveDate,
) -> CreateSessionParams {
    CreateSessionParams {
        mode,
        language,
        text_content: "The quick brown fox jumps over the lazy dog".to_string(),
        started_at: Some(date.and_hms_opt(12, 0, 0).unwrap().and_utc().fixed_offset()),
        ended_at: None,
        duration_ms: 60_000,
        input_length: 120,
        correct_length: 114,
        error_count: 6,
        accuracy,
        wpm,
        cpm: Some(wpm * 5.0),
        metadata: None,
        guest_session_id: None,
    }
}
