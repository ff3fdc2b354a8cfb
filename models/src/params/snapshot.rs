use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domains::sea_orm_active_enums::{LanguageScope, SnapshotMode, SnapshotPeriod};

#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildSnapshotParams {
    pub period: SnapshotPeriod,
    pub mode: Option<SnapshotMode>,
    pub language: Option<LanguageScope>,
    /// Day the period is computed around; defaults to the server-local today.
    pub as_of: Option<NaiveDate>,
}
