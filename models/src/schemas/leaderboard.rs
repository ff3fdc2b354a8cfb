use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::sea_orm_active_enums::{LanguageScope, SnapshotMode, SnapshotPeriod};
use crate::domains::{entries, snapshots};

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct SnapshotSchema {
    pub id: i32,
    pub period: SnapshotPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub mode: SnapshotMode,
    pub language: LanguageScope,
    pub generated_at: DateTime<Utc>,
}

impl From<snapshots::Model> for SnapshotSchema {
    fn from(snapshot: snapshots::Model) -> Self {
        Self {
            id: snapshot.id,
            period: snapshot.period,
            start_date: snapshot.start_date,
            end_date: snapshot.end_date,
            mode: snapshot.mode,
            language: snapshot.language,
            generated_at: snapshot.generated_at.to_utc(),
        }
    }
}

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct EntrySchema {
    pub rank: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub score_wpm: f64,
    pub score_accuracy: f64,
    pub session_count: i32,
    pub best_wpm: Option<f64>,
    pub total_duration_ms: i64,
}

impl From<entries::Model> for EntrySchema {
    fn from(entry: entries::Model) -> Self {
        Self {
            rank: entry.rank,
            user_id: entry.user_id,
            username: None,
            score_wpm: entry.score_wpm,
            score_accuracy: entry.score_accuracy,
            session_count: entry.session_count,
            best_wpm: entry.best_wpm,
            total_duration_ms: entry.total_duration_ms,
        }
    }
}

impl EntrySchema {
    pub fn with_username(entry: entries::Model, username: String) -> Self {
        Self {
            username: Some(username),
            ..Self::from(entry)
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct SnapshotDetailSchema {
    pub snapshot: SnapshotSchema,
    pub entries: Vec<EntrySchema>,
}

/// The caller's entry plus the two ranks on either side.
#[derive(Serialize, Debug, ToSchema)]
pub struct MyRankSchema {
    pub snapshot: SnapshotSchema,
    pub my_entry: Option<EntrySchema>,
    pub neighbors: Vec<EntrySchema>,
}
