use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))", enum_name = "language")]
pub enum Language {
    #[sea_orm(string_value = "ko")]
    Ko,
    #[sea_orm(string_value = "en")]
    En,
}

/// Language filter used by goals and leaderboard keys, where `all` means
/// every language at once.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))", enum_name = "language_scope")]
pub enum LanguageScope {
    #[sea_orm(string_value = "ko")]
    Ko,
    #[sea_orm(string_value = "en")]
    En,
    #[sea_orm(string_value = "all")]
    All,
}

impl LanguageScope {
    pub fn matches(&self, language: Language) -> bool {
        match self {
            LanguageScope::All => true,
            LanguageScope::Ko => language == Language::Ko,
            LanguageScope::En => language == Language::En,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))", enum_name = "practice_mode")]
pub enum PracticeMode {
    #[sea_orm(string_value = "practice")]
    Practice,
    #[sea_orm(string_value = "challenge")]
    Challenge,
    #[sea_orm(string_value = "ranked")]
    Ranked,
}

/// Mode filter for leaderboard snapshots. `all` aggregates every mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))", enum_name = "snapshot_mode")]
pub enum SnapshotMode {
    #[sea_orm(string_value = "practice")]
    Practice,
    #[sea_orm(string_value = "ranked")]
    Ranked,
    #[sea_orm(string_value = "all")]
    All,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))", enum_name = "snapshot_period")]
pub enum SnapshotPeriod {
    #[sea_orm(string_value = "daily")]
    Daily,
    #[sea_orm(string_value = "weekly")]
    Weekly,
    #[sea_orm(string_value = "monthly")]
    Monthly,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))", enum_name = "goal_kind")]
pub enum GoalKind {
    #[sea_orm(string_value = "time")]
    Time,
    #[sea_orm(string_value = "sessions")]
    Sessions,
    #[sea_orm(string_value = "chars")]
    Chars,
}

/// Badge award condition. Each variant names the scalar signal its
/// `condition_value` is compared against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))", enum_name = "badge_condition")]
pub enum BadgeCondition {
    #[sea_orm(string_value = "wpm_threshold")]
    WpmThreshold,
    #[sea_orm(string_value = "accuracy_threshold")]
    AccuracyThreshold,
    #[sea_orm(string_value = "streak_threshold")]
    StreakThreshold,
    #[sea_orm(string_value = "sessions_threshold")]
    SessionsThreshold,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))", enum_name = "challenge_status")]
pub enum ChallengeStatus {
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
}
