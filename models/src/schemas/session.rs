use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::sea_orm_active_enums::{Language, PracticeMode};
use crate::domains::sessions;

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct SessionSchema {
    pub id: i32,
    pub user_id: Option<i32>,
    pub guest_session_id: Option<String>,
    pub mode: PracticeMode,
    pub language: Language,
    pub text_content: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_ms: i64,
    pub input_length: i32,
    pub correct_length: i32,
    pub error_count: i32,
    pub accuracy: f64,
    pub wpm: f64,
    pub cpm: Option<f64>,
}

impl From<sessions::Model> for SessionSchema {
    fn from(session: sessions::Model) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            guest_session_id: session.guest_session_id,
            mode: session.mode,
            language: session.language,
            text_content: session.text_content,
            started_at: session.started_at.to_utc(),
            ended_at: session.ended_at.map(|v| v.to_utc()),
            duration_ms: session.duration_ms,
            input_length: session.input_length,
            correct_length: session.correct_length,
            error_count: session.error_count,
            accuracy: session.accuracy,
            wpm: session.wpm,
            cpm: session.cpm,
        }
    }
}

/// Trimmed row for history listings.
#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct SessionListItemSchema {
    pub id: i32,
    pub mode: PracticeMode,
    pub language: Language,
    pub wpm: f64,
    pub accuracy: f64,
    pub duration_ms: i64,
    pub started_at: DateTime<Utc>,
}

impl From<sessions::Model> for SessionListItemSchema {
    fn from(session: sessions::Model) -> Self {
        Self {
            id: session.id,
            mode: session.mode,
            language: session.language,
            wpm: session.wpm,
            accuracy: session.accuracy,
            duration_ms: session.duration_ms,
            started_at: session.started_at.to_utc(),
        }
    }
}

/// Lifetime aggregate over a user's (or guest's) whole session history.
#[derive(Serialize, Debug, ToSchema)]
pub struct UserStatsSchema {
    pub total_sessions: u64,
    pub avg_wpm: f64,
    pub avg_accuracy: f64,
    pub best_wpm: Option<f64>,
    pub total_time_ms: i64,
    pub korean_sessions: u64,
    pub english_sessions: u64,
}
