use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domains::sea_orm_active_enums::{GoalKind, LanguageScope};

#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalParams {
    pub kind: GoalKind,
    #[validate(range(min = 1))]
    pub target_value: i32,
    pub language: Option<LanguageScope>,
}
