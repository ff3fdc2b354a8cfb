use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, Set};

use models::domains::users;
use models::params::user::CreateUserParams;

use crate::error::{CoreError, CoreResult};

pub async fn create_user(db: &DbConn, params: CreateUserParams) -> CoreResult<users::Model> {
    let existing = users::Entity::find()
        .filter(
            users::Column::Email
                .eq(params.email.clone())
                .or(users::Column::Username.eq(params.username.clone())),
        )
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(CoreError::Conflict("User already exists".to_string()));
    }

    let user = users::ActiveModel {
        username: Set(params.username),
        email: Set(params.email),
        created_at: Set(Utc::now().fixed_offset()),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(user)
}

pub async fn get_user(db: &DbConn, id: i32) -> CoreResult<Option<users::Model>> {
    Ok(users::Entity::find_by_id(id).one(db).await?)
}
