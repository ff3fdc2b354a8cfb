use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Language;

/// Per-user/per-day/per-language rollup of the day's sessions. Fully
/// recomputed from the raw session rows on every write for that day.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub date: Date,
    pub language: Language,
    pub total_sessions: i32,
    pub total_duration_ms: i64,
    pub total_chars: i32,
    pub total_errors: i32,
    pub avg_wpm: f64,
    pub avg_accuracy: f64,
    pub best_wpm: Option<f64>,
    pub best_accuracy: Option<f64>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
