use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::goals;
use crate::domains::sea_orm_active_enums::{GoalKind, LanguageScope};

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct GoalSchema {
    pub id: i32,
    pub kind: GoalKind,
    pub target_value: i32,
    pub language: LanguageScope,
    pub is_active: bool,
}

impl From<goals::Model> for GoalSchema {
    fn from(goal: goals::Model) -> Self {
        Self {
            id: goal.id,
            kind: goal.kind,
            target_value: goal.target_value,
            language: goal.language,
            is_active: goal.is_active,
        }
    }
}

/// Today's progress against one configured goal.
#[derive(Serialize, Debug, ToSchema)]
pub struct GoalProgressSchema {
    pub goal: GoalSchema,
    pub current_value: i64,
    pub target_value: i32,
    pub progress_percent: f64,
    pub is_achieved: bool,
}
