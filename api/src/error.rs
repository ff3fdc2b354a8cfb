use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use app::error::CoreError;

use crate::models::response::{ApiErrorResponse, ValidationErrorResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Core(core) => {
                let status = match &core {
                    CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                    CoreError::Conflict(_) => StatusCode::CONFLICT,
                    CoreError::Invalid(_) => StatusCode::BAD_REQUEST,
                    CoreError::Db(err) => {
                        tracing::error!("Database error: {}", err);
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    "Internal server error".to_string()
                } else {
                    core.to_string()
                };
                (status, axum::Json(ApiErrorResponse { message })).into_response()
            }
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(ValidationErrorResponse::from(errors)),
            )
                .into_response(),
            ApiError::JsonRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                axum::Json(ApiErrorResponse {
                    message: rejection.body_text(),
                }),
            )
                .into_response(),
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, axum::Json(ApiErrorResponse { message }))
                    .into_response()
            }
            ApiError::Unexpected(err) => {
                tracing::error!("Unexpected error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(ApiErrorResponse {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
