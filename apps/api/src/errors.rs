use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Server-side failures are logged in full here; callers only ever see the
/// generic message.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data failed schema checks.
    #[error("Validation error: {message}")]
    Validation {
        message: &'static str,
        details: Option<String>,
    },

    /// A required secret is missing from the process configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] LlmError),

    #[error("I/O error ({context}): {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn validation(message: &'static str) -> Self {
        AppError::Validation {
            message,
            details: None,
        }
    }

    pub fn validation_with_details(message: &'static str, details: impl Into<String>) -> Self {
        AppError::Validation {
            message,
            details: Some(details.into()),
        }
    }

    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        AppError::Io { context, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation { message, details } => {
                tracing::debug!("Rejected request: {message} ({details:?})");
                let body = match details {
                    Some(details) => json!({ "error": message, "details": details }),
                    None => json!({ "error": message }),
                };
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "API key configuration error" }),
                )
            }
            AppError::Upstream(e) => {
                tracing::error!("Error calling completion API: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to get response from AI service" }),
                )
            }
            AppError::Io { context, source } => {
                tracing::error!("{context}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": context }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_without_details() {
        let (status, body) = body_json(AppError::validation("Invalid request body")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid request body" }));
    }

    #[tokio::test]
    async fn test_validation_with_details() {
        let err = AppError::validation_with_details(
            "Invalid contact form data",
            "Name must be at least 2 characters",
        );
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], "Name must be at least 2 characters");
    }

    #[tokio::test]
    async fn test_upstream_hides_cause() {
        let err = AppError::Upstream(LlmError::Api {
            status: 401,
            message: "invalid api key sk-secret".to_string(),
        });
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to get response from AI service" }));
    }

    #[tokio::test]
    async fn test_io_hides_cause() {
        let err = AppError::io(
            "Failed to download resume",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/var/lib/scratch denied"),
        );
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to download resume" }));
        assert!(!body.to_string().contains("/var/lib"));
    }
}
