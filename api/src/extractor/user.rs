use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

/// The web layer in front of this service resolves authentication and
/// forwards the account id in this header. Auth itself is out of scope here.
const USER_ID_HEADER: &str = "x-user-id";

/// Identity of the calling user; rejects anonymous requests.
pub struct UserId(pub i32);

/// Identity of the calling user, if any. Guest traffic yields `None`.
pub struct MaybeUserId(pub Option<i32>);

impl<S> FromRequestParts<S> for MaybeUserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(MaybeUserId(None));
        };

        let user_id = value
            .to_str()
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or_else(|| {
                ApiError::Unauthorized(format!("Malformed {USER_ID_HEADER} header"))
            })?;

        Ok(MaybeUserId(Some(user_id)))
    }
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let MaybeUserId(user_id) = MaybeUserId::from_request_parts(parts, state).await?;

        user_id
            .map(UserId)
            .ok_or_else(|| ApiError::Unauthorized("Login required".to_string()))
    }
}
