use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::WebhookError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Webhook error: {0}")]
    Webhook(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<WebhookError> for AppError {
    fn from(e: WebhookError) -> Self {
        match e {
            WebhookError::NotConfigured => AppError::Unavailable(
                "Export webhook is not configured (set WEBHOOK_URL)".to_string(),
            ),
            other => AppError::Webhook(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "Content generation failed".to_string(),
                )
            }
            AppError::Webhook(msg) => {
                tracing::error!("Webhook error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "WEBHOOK_ERROR",
                    "The export webhook did not accept the post".to_string(),
                )
            }
            AppError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                msg.clone(),
            ),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Llm("x".into()), StatusCode::BAD_GATEWAY),
            (AppError::Webhook("x".into()), StatusCode::BAD_GATEWAY),
            (AppError::Unavailable("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_unconfigured_webhook_maps_to_unavailable() {
        let error: AppError = WebhookError::NotConfigured.into();
        assert!(matches!(error, AppError::Unavailable(_)));

        let error: AppError = WebhookError::Rejected {
            status: 500,
            body: "nope".to_string(),
        }
        .into();
        assert!(matches!(error, AppError::Webhook(_)));
    }
}
