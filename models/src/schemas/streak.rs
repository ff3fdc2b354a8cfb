use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::streaks;

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct StreakSchema {
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_active_date: Option<NaiveDate>,
    pub streak_start_date: Option<NaiveDate>,
}

impl From<streaks::Model> for StreakSchema {
    fn from(streak: streaks::Model) -> Self {
        Self {
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
            last_active_date: streak.last_active_date,
            streak_start_date: streak.streak_start_date,
        }
    }
}
