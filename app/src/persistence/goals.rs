use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, Set,
};

use models::domains::sea_orm_active_enums::{GoalKind, LanguageScope};
use models::domains::{daily_stats, goals};
use models::params::goal::CreateGoalParams;
use models::schemas::goal::{GoalProgressSchema, GoalSchema};

use crate::error::{CoreError, CoreResult};

pub async fn create_goal(
    db: &DbConn,
    user_id: i32,
    params: CreateGoalParams,
) -> CoreResult<goals::Model> {
    let goal = goals::ActiveModel {
        user_id: Set(user_id),
        kind: Set(params.kind),
        target_value: Set(params.target_value),
        language: Set(params.language.unwrap_or(LanguageScope::All)),
        is_active: Set(true),
        created_at: Set(Utc::now().fixed_offset()),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(goal)
}

pub async fn list_goals(db: &DbConn, user_id: i32) -> CoreResult<Vec<goals::Model>> {
    Ok(goals::Entity::find()
        .filter(goals::Column::UserId.eq(user_id))
        .filter(goals::Column::IsActive.eq(true))
        .order_by_desc(goals::Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn deactivate_goal(db: &DbConn, user_id: i32, goal_id: i32) -> CoreResult<goals::Model> {
    let goal = goals::Entity::find_by_id(goal_id)
        .filter(goals::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found("Goal"))?;

    let mut active: goals::ActiveModel = goal.into();
    active.is_active = Set(false);
    active.updated_at = Set(Utc::now().fixed_offset());

    Ok(active.update(db).await?)
}

/// Today's progress for every active goal. Pure read: combines the goal
/// targets with today's daily rollups, summing across languages when the
/// goal's scope is `all`. A zero target reports 0% and not achieved.
pub async fn goal_progress(
    db: &DbConn,
    user_id: i32,
    today: NaiveDate,
) -> CoreResult<Vec<GoalProgressSchema>> {
    let goals = list_goals(db, user_id).await?;

    let today_stats = daily_stats::Entity::find()
        .filter(daily_stats::Column::UserId.eq(user_id))
        .filter(daily_stats::Column::Date.eq(today))
        .all(db)
        .await?;

    let mut results = Vec::with_capacity(goals.len());
    for goal in goals {
        let scoped = today_stats
            .iter()
            .filter(|d| goal.language.matches(d.language));

        let current_value: i64 = match goal.kind {
            GoalKind::Time => scoped.map(|d| d.total_duration_ms).sum::<i64>() / 60_000,
            GoalKind::Sessions => scoped.map(|d| i64::from(d.total_sessions)).sum(),
            GoalKind::Chars => scoped.map(|d| i64::from(d.total_chars)).sum(),
        };

        let target_value = goal.target_value;
        let (progress_percent, is_achieved) = if target_value > 0 {
            let percent = (current_value as f64 / f64::from(target_value) * 100.0).min(100.0);
            (percent, current_value >= i64::from(target_value))
        } else {
            (0.0, false)
        };

        results.push(GoalProgressSchema {
            goal: GoalSchema::from(goal),
            current_value,
            target_value,
            progress_percent,
            is_achieved,
        });
    }

    Ok(results)
}
