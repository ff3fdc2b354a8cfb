mod error;
mod extractor;
mod init;
mod openapi;

pub mod models;
pub mod routers;

pub use init::{setup_config, setup_db, setup_router};
use serde::Serialize;
use utoipa::ToSchema;

/// A generic envelope for mutation responses.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    success: bool,
    message: String,
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: Option<T>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}
