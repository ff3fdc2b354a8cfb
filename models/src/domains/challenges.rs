use sea_orm::entity::prelude::*;

/// Daily challenge, unique per date. Targets are optional; the set ones
/// must all be satisfied for completion.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "challenges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub date: Date,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub difficulty: i16,
    pub target_wpm: Option<i32>,
    pub target_accuracy: Option<f64>,
    pub target_sessions: Option<i32>,
    pub target_time_minutes: Option<i32>,
    pub reward_points: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_challenges::Entity")]
    UserChallenges,
}

impl Related<super::user_challenges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserChallenges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
