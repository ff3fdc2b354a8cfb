use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domains::daily_stats;
use crate::domains::sea_orm_active_enums::Language;

#[derive(Serialize, Clone, Debug, ToSchema)]
pub struct DailyStatSchema {
    pub date: NaiveDate,
    pub language: Language,
    pub total_sessions: i32,
    pub total_duration_ms: i64,
    pub total_chars: i32,
    pub total_errors: i32,
    pub avg_wpm: f64,
    pub avg_accuracy: f64,
    pub best_wpm: Option<f64>,
    pub best_accuracy: Option<f64>,
}

impl From<daily_stats::Model> for DailyStatSchema {
    fn from(stat: daily_stats::Model) -> Self {
        Self {
            date: stat.date,
            language: stat.language,
            total_sessions: stat.total_sessions,
            total_duration_ms: stat.total_duration_ms,
            total_chars: stat.total_chars,
            total_errors: stat.total_errors,
            avg_wpm: stat.avg_wpm,
            avg_accuracy: stat.avg_accuracy,
            best_wpm: stat.best_wpm,
            best_accuracy: stat.best_accuracy,
        }
    }
}

/// Last-30-days summary plus streak info.
#[derive(Serialize, Debug, ToSchema)]
pub struct StatsOverviewSchema {
    pub total_sessions: i64,
    pub total_duration_ms: i64,
    pub avg_wpm: f64,
    pub avg_accuracy: f64,
    pub best_wpm: Option<f64>,
    pub current_streak: i32,
    pub longest_streak: i32,
}
