use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domains::sea_orm_active_enums::{Language, PracticeMode};

#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionParams {
    pub mode: PracticeMode,
    pub language: Language,
    pub text_content: String,
    pub started_at: Option<DateTime<FixedOffset>>,
    pub ended_at: Option<DateTime<FixedOffset>>,
    #[validate(range(min = 0))]
    pub duration_ms: i64,
    #[validate(range(min = 0))]
    pub input_length: i32,
    #[validate(range(min = 0))]
    pub correct_length: i32,
    #[validate(range(min = 0))]
    pub error_count: i32,
    #[validate(range(min = 0.0, max = 100.0))]
    pub accuracy: f64,
    #[validate(range(min = 0.0))]
    pub wpm: f64,
    #[validate(range(min = 0.0))]
    pub cpm: Option<f64>,
    #[schema(value_type = Object)]
    pub metadata: Option<serde_json::Value>,
    pub guest_session_id: Option<String>,
}

/// End-time/duration finalization, the only mutation a session permits.
#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinishSessionParams {
    pub ended_at: DateTime<FixedOffset>,
    #[validate(range(min = 0))]
    pub duration_ms: i64,
}
