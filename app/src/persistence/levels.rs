use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use models::domains::levels;

use crate::error::CoreResult;

pub async fn get_or_create_level<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
) -> CoreResult<levels::Model> {
    let existing = levels::Entity::find()
        .filter(levels::Column::UserId.eq(user_id))
        .one(db)
        .await?;

    if let Some(level) = existing {
        return Ok(level);
    }

    let level = levels::ActiveModel {
        user_id: Set(user_id),
        level: Set(1),
        experience: Set(0),
        total_points: Set(0),
        created_at: Set(Utc::now().fixed_offset()),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(level)
}

/// Add experience and roll over levels. Advancing past level L costs
/// L * 100 experience, so one large addition can jump several levels.
pub async fn add_experience<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    amount: i32,
) -> CoreResult<levels::Model> {
    let current = get_or_create_level(db, user_id).await?;

    let mut level = current.level;
    let mut experience = current.experience + amount;
    while experience >= level * 100 {
        experience -= level * 100;
        level += 1;
    }

    let mut active: levels::ActiveModel = current.into();
    active.level = Set(level);
    active.experience = Set(experience);
    active.updated_at = Set(Utc::now().fixed_offset());

    Ok(active.update(db).await?)
}

pub async fn add_points<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    amount: i32,
) -> CoreResult<levels::Model> {
    let current = get_or_create_level(db, user_id).await?;

    let total_points = current.total_points + amount;
    let mut active: levels::ActiveModel = current.into();
    active.total_points = Set(total_points);
    active.updated_at = Set(Utc::now().fixed_offset());

    Ok(active.update(db).await?)
}
