use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::users;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserSchema {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<users::Model> for UserSchema {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
