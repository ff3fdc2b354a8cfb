use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::sea_orm_active_enums::BadgeCondition;
use crate::domains::{badges, user_badges};

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct BadgeSchema {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub rarity: i16,
    pub condition: BadgeCondition,
    pub condition_value: i32,
    pub reward_points: i32,
}

impl From<badges::Model> for BadgeSchema {
    fn from(badge: badges::Model) -> Self {
        Self {
            id: badge.id,
            code: badge.code,
            name: badge.name,
            description: badge.description,
            icon: badge.icon,
            category: badge.category,
            rarity: badge.rarity,
            condition: badge.condition,
            condition_value: badge.condition_value,
            reward_points: badge.reward_points,
        }
    }
}

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct UserBadgeSchema {
    pub id: i32,
    pub badge: BadgeSchema,
    pub earned_at: DateTime<Utc>,
    pub is_featured: bool,
}

impl UserBadgeSchema {
    pub fn new(user_badge: user_badges::Model, badge: badges::Model) -> Self {
        Self {
            id: user_badge.id,
            badge: BadgeSchema::from(badge),
            earned_at: user_badge.earned_at.to_utc(),
            is_featured: user_badge.is_featured,
        }
    }
}
