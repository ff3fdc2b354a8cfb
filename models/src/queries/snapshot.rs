use serde::Deserialize;

use crate::domains::sea_orm_active_enums::{LanguageScope, SnapshotMode, SnapshotPeriod};

#[derive(Deserialize, Default)]
pub struct SnapshotQuery {
    pub period: Option<SnapshotPeriod>,
    pub mode: Option<SnapshotMode>,
    pub language: Option<LanguageScope>,
}
