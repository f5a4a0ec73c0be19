use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::generator::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Generation(err) => {
                tracing::error!("Generation error: {err}");
                match err {
                    GenerationError::AuthenticationFailure => (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_AUTH",
                        "The AI service rejected the server credential".to_string(),
                    ),
                    GenerationError::RateLimited => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "RATE_LIMITED",
                        "The AI service is rate limiting requests; try again shortly".to_string(),
                    ),
                    GenerationError::ServiceUnavailable(_) => (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_UNAVAILABLE",
                        "The AI service is currently unavailable".to_string(),
                    ),
                    GenerationError::EmptyCompletion | GenerationError::Unknown(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "GENERATION_ERROR",
                        "Prompt generation failed".to_string(),
                    ),
                }
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
