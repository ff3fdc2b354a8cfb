use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{LanguageScope, SnapshotMode, SnapshotPeriod};

/// Immutable leaderboard materialization for a (period, date range, mode,
/// language) key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "snapshots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub period: SnapshotPeriod,
    pub start_date: Date,
    pub end_date: Date,
    pub mode: SnapshotMode,
    pub language: LanguageScope,
    pub generated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entries::Entity")]
    Entries,
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
