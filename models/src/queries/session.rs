use serde::Deserialize;

use crate::domains::sea_orm_active_enums::{Language, PracticeMode};

#[derive(Deserialize, Default)]
pub struct SessionQuery {
    pub language: Option<Language>,
    pub mode: Option<PracticeMode>,
    /// Identifies a guest's sessions when no user id is supplied.
    pub guest_session_id: Option<String>,
}
