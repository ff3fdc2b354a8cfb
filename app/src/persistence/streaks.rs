use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use models::domains::streaks;

use crate::error::CoreResult;

/// Advance the user's streak for one day of activity.
///
/// Same-day repeats are no-ops, the day after the last activity extends the
/// streak, and any other date (gaps, or dates before the last activity)
/// resets it to 1. longest_streak never decreases.
pub async fn update_streak<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    activity_date: NaiveDate,
) -> CoreResult<streaks::Model> {
    let streak = get_or_create_streak(db, user_id).await?;

    let mut current_streak = streak.current_streak;
    let mut streak_start_date = streak.streak_start_date;

    match streak.last_active_date {
        None => {
            current_streak = 1;
            streak_start_date = Some(activity_date);
        }
        Some(last) if last == activity_date => {
            // same-day repeat activity does not double-count
        }
        Some(last) if Some(activity_date) == last.succ_opt() => {
            current_streak += 1;
        }
        Some(_) => {
            current_streak = 1;
            streak_start_date = Some(activity_date);
        }
    }

    let longest_streak = streak.longest_streak.max(current_streak);

    let mut active: streaks::ActiveModel = streak.into();
    active.current_streak = Set(current_streak);
    active.longest_streak = Set(longest_streak);
    active.last_active_date = Set(Some(activity_date));
    active.streak_start_date = Set(streak_start_date);
    active.updated_at = Set(Utc::now().fixed_offset());

    Ok(active.update(db).await?)
}

pub async fn get_or_create_streak<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> CoreResult<streaks::Model> {
    let existing = streaks::Entity::find()
        .filter(streaks::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    if let Some(streak) = existing {
        return Ok(streak);
    }

    let streak = streaks::ActiveModel {
        user_id: Set(user_id),
        current_streak: Set(0),
        longest_streak: Set(0),
        last_active_date: Set(None),
        streak_start_date: Set(None),
        created_at: Set(Utc::now().fixed_offset()),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(streak)
}
