use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::sea_orm_active_enums::ChallengeStatus;
use crate::domains::{challenges, user_challenges};

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct ChallengeSchema {
    pub id: i32,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub difficulty: i16,
    pub target_wpm: Option<i32>,
    pub target_accuracy: Option<f64>,
    pub target_sessions: Option<i32>,
    pub target_time_minutes: Option<i32>,
    pub reward_points: i32,
}

impl From<challenges::Model> for ChallengeSchema {
    fn from(challenge: challenges::Model) -> Self {
        Self {
            id: challenge.id,
            date: challenge.date,
            title: challenge.title,
            description: challenge.description,
            difficulty: challenge.difficulty,
            target_wpm: challenge.target_wpm,
            target_accuracy: challenge.target_accuracy,
            target_sessions: challenge.target_sessions,
            target_time_minutes: challenge.target_time_minutes,
            reward_points: challenge.reward_points,
        }
    }
}

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct ChallengeProgressSchema {
    pub id: i32,
    pub challenge_id: i32,
    pub status: ChallengeStatus,
    pub current_wpm: Option<f64>,
    pub current_accuracy: Option<f64>,
    pub current_sessions: i32,
    pub current_time_minutes: i32,
    pub reward_claimed: bool,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<user_challenges::Model> for ChallengeProgressSchema {
    fn from(participation: user_challenges::Model) -> Self {
        Self {
            id: participation.id,
            challenge_id: participation.challenge_id,
            status: participation.status,
            current_wpm: participation.current_wpm,
            current_accuracy: participation.current_accuracy,
            current_sessions: participation.current_sessions,
            current_time_minutes: participation.current_time_minutes,
            reward_claimed: participation.reward_claimed,
            started_at: participation.started_at.to_utc(),
            completed_at: participation.completed_at.map(|v| v.to_utc()),
        }
    }
}

/// Today's challenge together with the caller's participation, if any.
#[derive(Serialize, Debug, ToSchema)]
pub struct TodayChallengeSchema {
    pub challenge: ChallengeSchema,
    pub my_progress: Option<ChallengeProgressSchema>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ClaimRewardSchema {
    pub reward_points: i32,
    pub new_level: i32,
    pub new_experience: i32,
}
