mod json;
mod user;
mod valid;

pub use json::Json;
pub use user::{MaybeUserId, UserId};
pub use valid::Valid;
