use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::levels;

use super::badge::UserBadgeSchema;

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct LevelSchema {
    pub level: i32,
    pub experience: i32,
    pub exp_to_next_level: i32,
    pub progress_percent: f64,
    pub total_points: i32,
}

impl From<levels::Model> for LevelSchema {
    fn from(level: levels::Model) -> Self {
        let exp_to_next_level = level.level * 100;
        let progress_percent =
            (f64::from(level.experience) / f64::from(exp_to_next_level) * 100.0).min(100.0);
        Self {
            level: level.level,
            experience: level.experience,
            exp_to_next_level,
            progress_percent,
            total_points: level.total_points,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ProfileSchema {
    pub level_info: LevelSchema,
    pub badges: Vec<UserBadgeSchema>,
    pub badges_count: usize,
    pub featured_badges: Vec<UserBadgeSchema>,
}
