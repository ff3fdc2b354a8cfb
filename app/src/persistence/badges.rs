use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, SqlErr, TransactionTrait,
};

use models::domains::sea_orm_active_enums::BadgeCondition;
use models::domains::{badges, sessions, streaks, user_badges};
use models::schemas::badge::UserBadgeSchema;
use models::schemas::level::{LevelSchema, ProfileSchema};

use crate::error::{CoreError, CoreResult};

use super::levels;

const FEATURED_LIMIT: usize = 3;

/// Scan the user's aggregate signals against the badge catalog and grant
/// every unowned badge whose threshold is met. Each grant is one
/// transaction: the award row plus the reward credit (full points, half
/// experience) commit together.
///
/// Reruns are idempotent: owned badges are filtered out, and a concurrent
/// duplicate insert hits uq_user_badge, which rolls back that grant alone.
pub async fn check_and_award(db: &DbConn, user_id: i32) -> CoreResult<Vec<badges::Model>> {
    let max_wpm = sessions::Entity::find()
        .filter(sessions::Column::UserId.eq(user_id))
        .order_by_desc(sessions::Column::Wpm)
        .one(db)
        .await?
        .map(|s| s.wpm)
        .unwrap_or(0.0);
    let max_accuracy = sessions::Entity::find()
        .filter(sessions::Column::UserId.eq(user_id))
        .order_by_desc(sessions::Column::Accuracy)
        .one(db)
        .await?
        .map(|s| s.accuracy)
        .unwrap_or(0.0);
    let total_sessions = sessions::Entity::find()
        .filter(sessions::Column::UserId.eq(user_id))
        .count(db)
        .await?;
    let current_streak = streaks::Entity::find()
        .filter(streaks::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .map(|s| s.current_streak)
        .unwrap_or(0);

    let signals = [
        (BadgeCondition::WpmThreshold, max_wpm.floor() as i32),
        (BadgeCondition::AccuracyThreshold, max_accuracy.floor() as i32),
        (BadgeCondition::SessionsThreshold, total_sessions as i32),
        (BadgeCondition::StreakThreshold, current_streak),
    ];

    let owned: Vec<i32> = user_badges::Entity::find()
        .filter(user_badges::Column::UserId.eq(user_id))
        .all(db)
        .await?
        .into_iter()
        .map(|ub| ub.badge_id)
        .collect();

    let mut awarded = Vec::new();
    for (condition, value) in signals {
        let candidates = badges::Entity::find()
            .filter(badges::Column::Condition.eq(condition))
            .filter(badges::Column::ConditionValue.lte(value))
            .filter(badges::Column::IsActive.eq(true))
            .filter(badges::Column::Id.is_not_in(owned.clone()))
            .all(db)
            .await?;

        for badge in candidates {
            let txn = db.begin().await?;

            let grant = user_badges::ActiveModel {
                user_id: Set(user_id),
                badge_id: Set(badge.id),
                earned_at: Set(Utc::now().fixed_offset()),
                is_featured: Set(false),
                ..Default::default()
            }
            .insert(&txn)
            .await;

            match grant {
                Ok(_) => {
                    levels::add_points(&txn, user_id, badge.reward_points).await?;
                    levels::add_experience(&txn, user_id, badge.reward_points / 2).await?;
                    txn.commit().await?;
                    awarded.push(badge);
                }
                // another writer granted it first
                Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    txn.rollback().await?;
                }
                Err(err) => {
                    txn.rollback().await?;
                    return Err(err.into());
                }
            }
        }
    }

    Ok(awarded)
}

pub async fn list_badges(db: &DbConn, category: Option<String>) -> CoreResult<Vec<badges::Model>> {
    let mut query = badges::Entity::find().filter(badges::Column::IsActive.eq(true));

    if let Some(category) = category {
        query = query.filter(badges::Column::Category.eq(category));
    }

    Ok(query
        .order_by_asc(badges::Column::Category)
        .order_by_asc(badges::Column::Rarity)
        .all(db)
        .await?)
}

pub async fn user_badges(db: &DbConn, user_id: i32) -> CoreResult<Vec<UserBadgeSchema>> {
    let rows = user_badges::Entity::find()
        .filter(user_badges::Column::UserId.eq(user_id))
        .order_by_desc(user_badges::Column::EarnedAt)
        .find_also_related(badges::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(ub, badge)| badge.map(|b| UserBadgeSchema::new(ub, b)))
        .collect())
}

pub async fn get_profile(db: &DbConn, user_id: i32) -> CoreResult<ProfileSchema> {
    let level = levels::get_or_create_level(db, user_id).await?;
    let badges = user_badges(db, user_id).await?;
    let featured_badges = badges
        .iter()
        .filter(|b| b.is_featured)
        .take(FEATURED_LIMIT)
        .cloned()
        .collect();

    Ok(ProfileSchema {
        level_info: LevelSchema::from(level),
        badges_count: badges.len(),
        featured_badges,
        badges,
    })
}

/// Mark one owned badge as the profile's featured badge, clearing any
/// previous selection.
pub async fn set_featured(db: &DbConn, user_id: i32, user_badge_id: i32) -> CoreResult<()> {
    let txn = db.begin().await?;

    let target = user_badges::Entity::find_by_id(user_badge_id)
        .filter(user_badges::Column::UserId.eq(user_id))
        .one(&txn)
        .await?
        .ok_or_else(|| CoreError::not_found("Badge"))?;

    let currently_featured = user_badges::Entity::find()
        .filter(user_badges::Column::UserId.eq(user_id))
        .filter(user_badges::Column::IsFeatured.eq(true))
        .all(&txn)
        .await?;
    for featured in currently_featured {
        let mut active: user_badges::ActiveModel = featured.into();
        active.is_featured = Set(false);
        active.update(&txn).await?;
    }

    let mut active: user_badges::ActiveModel = target.into();
    active.is_featured = Set(true);
    active.update(&txn).await?;

    txn.commit().await?;

    Ok(())
}
