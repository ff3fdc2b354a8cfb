use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbConn, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use models::domains::sea_orm_active_enums::Language;
use models::domains::{daily_stats, sessions, streaks};
use models::schemas::stats::StatsOverviewSchema;

use crate::error::CoreResult;

/// UTC bounds of one local calendar day.
pub fn local_day_bounds(
    date: NaiveDate,
    offset: FixedOffset,
) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let start = date
        .and_time(NaiveTime::MIN)
        .and_local_timezone(offset)
        .unwrap();
    (start, start + Duration::days(1))
}

/// Recompute the (user, date, language) aggregate from all of that day's
/// sessions and upsert the row. A full recompute keeps the averages exact
/// under corrections, unlike an incremental update.
pub async fn roll_daily_stats<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    date: NaiveDate,
    language: Language,
    offset: FixedOffset,
) -> CoreResult<daily_stats::Model> {
    let (day_start, day_end) = local_day_bounds(date, offset);

    let today_sessions = sessions::Entity::find()
        .filter(sessions::Column::UserId.eq(user_id))
        .filter(sessions::Column::Language.eq(language))
        .filter(sessions::Column::StartedAt.gte(day_start))
        .filter(sessions::Column::StartedAt.lt(day_end))
        .all(db)
        .await?;

    let total_sessions = today_sessions.len() as i32;
    let total_duration_ms: i64 = today_sessions.iter().map(|s| s.duration_ms).sum();
    let total_chars: i32 = today_sessions.iter().map(|s| s.input_length).sum();
    let total_errors: i32 = today_sessions.iter().map(|s| s.error_count).sum();

    let (avg_wpm, avg_accuracy) = if today_sessions.is_empty() {
        (0.0, 0.0)
    } else {
        let n = today_sessions.len() as f64;
        (
            today_sessions.iter().map(|s| s.wpm).sum::<f64>() / n,
            today_sessions.iter().map(|s| s.accuracy).sum::<f64>() / n,
        )
    };
    let best_wpm = today_sessions
        .iter()
        .map(|s| s.wpm)
        .max_by(f64::total_cmp);
    let best_accuracy = today_sessions
        .iter()
        .map(|s| s.accuracy)
        .max_by(f64::total_cmp);

    let existing = daily_stats::Entity::find()
        .filter(daily_stats::Column::UserId.eq(user_id))
        .filter(daily_stats::Column::Date.eq(date))
        .filter(daily_stats::Column::Language.eq(language))
        .one(db)
        .await?;

    let stat = match existing {
        Some(stat) => {
            let mut stat: daily_stats::ActiveModel = stat.into();
            stat.total_sessions = Set(total_sessions);
            stat.total_duration_ms = Set(total_duration_ms);
            stat.total_chars = Set(total_chars);
            stat.total_errors = Set(total_errors);
            stat.avg_wpm = Set(avg_wpm);
            stat.avg_accuracy = Set(avg_accuracy);
            stat.best_wpm = Set(best_wpm);
            stat.best_accuracy = Set(best_accuracy);
            stat.updated_at = Set(Utc::now().fixed_offset());
            stat.update(db).await?
        }
        None => {
            daily_stats::ActiveModel {
                user_id: Set(user_id),
                date: Set(date),
                language: Set(language),
                total_sessions: Set(total_sessions),
                total_duration_ms: Set(total_duration_ms),
                total_chars: Set(total_chars),
                total_errors: Set(total_errors),
                avg_wpm: Set(avg_wpm),
                avg_accuracy: Set(avg_accuracy),
                best_wpm: Set(best_wpm),
                best_accuracy: Set(best_accuracy),
                created_at: Set(Utc::now().fixed_offset()),
                updated_at: Set(Utc::now().fixed_offset()),
                ..Default::default()
            }
            .insert(db)
            .await?
        }
    };

    Ok(stat)
}

/// Last-30-days rollup plus streak info.
pub async fn overview(db: &DbConn, user_id: i32, today: NaiveDate) -> CoreResult<StatsOverviewSchema> {
    let thirty_days_ago = today - Duration::days(30);

    let recent = daily_stats::Entity::find()
        .filter(daily_stats::Column::UserId.eq(user_id))
        .filter(daily_stats::Column::Date.gte(thirty_days_ago))
        .all(db)
        .await?;

    let total_sessions: i64 = recent.iter().map(|d| i64::from(d.total_sessions)).sum();
    let total_duration_ms: i64 = recent.iter().map(|d| d.total_duration_ms).sum();
    let (avg_wpm, avg_accuracy) = if recent.is_empty() {
        (0.0, 0.0)
    } else {
        let n = recent.len() as f64;
        (
            recent.iter().map(|d| d.avg_wpm).sum::<f64>() / n,
            recent.iter().map(|d| d.avg_accuracy).sum::<f64>() / n,
        )
    };
    let best_wpm = recent
        .iter()
        .filter_map(|d| d.best_wpm)
        .max_by(f64::total_cmp);

    let streak = streaks::Entity::find()
        .filter(streaks::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    let (current_streak, longest_streak) = streak
        .map(|s| (s.current_streak, s.longest_streak))
        .unwrap_or((0, 0));

    Ok(StatsOverviewSchema {
        total_sessions,
        total_duration_ms,
        avg_wpm,
        avg_accuracy,
        best_wpm,
        current_streak,
        longest_streak,
    })
}

/// Date-range listing for the activity calendar.
pub async fn calendar(
    db: &DbConn,
    user_id: i32,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> CoreResult<Vec<daily_stats::Model>> {
    let mut query = daily_stats::Entity::find().filter(daily_stats::Column::UserId.eq(user_id));

    if let Some(start) = start {
        query = query.filter(daily_stats::Column::Date.gte(start));
    }
    if let Some(end) = end {
        query = query.filter(daily_stats::Column::Date.lte(end));
    }

    Ok(query
        .order_by_desc(daily_stats::Column::Date)
        .all(db)
        .await?)
}
