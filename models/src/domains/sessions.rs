use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Language, PracticeMode};

/// Raw typing attempt. Immutable once written, aside from the
/// ended_at/duration finalization.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub guest_session_id: Option<String>,
    pub mode: PracticeMode,
    pub language: Language,
    #[sea_orm(column_type = "Text")]
    pub text_content: String,
    pub started_at: DateTimeWithTimeZone,
    pub ended_at: Option<DateTimeWithTimeZone>,
    pub duration_ms: i64,
    pub input_length: i32,
    pub correct_length: i32,
    pub error_count: i32,
    pub accuracy: f64,
    pub wpm: f64,
    pub cpm: Option<f64>,
    pub metadata: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
