use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinChallengeParams {
    pub challenge_id: i32,
}

#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChallengeParams {
    pub date: NaiveDate,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 1, max = 4))]
    pub difficulty: i16,
    #[validate(range(min = 1))]
    pub target_wpm: Option<i32>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub target_accuracy: Option<f64>,
    #[validate(range(min = 1))]
    pub target_sessions: Option<i32>,
    #[validate(range(min = 1))]
    pub target_time_minutes: Option<i32>,
    #[validate(range(min = 0))]
    pub reward_points: Option<i32>,
}
