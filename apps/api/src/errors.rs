use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extract::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The variants stay distinct internally, but every one of them is reported
/// to clients with the same shape: HTTP 500 and `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Input(String),

    #[error("Error extracting text from PDF: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("AI analysis failed: {0}")]
    Provider(#[from] LlmError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Input(msg) => tracing::warn!("Rejected analysis request: {msg}"),
            AppError::Extraction(e) => tracing::error!("Extraction error: {e}"),
            AppError::Provider(e) => tracing::error!("LLM error: {e}"),
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_every_kind_maps_to_500_with_error_key() {
        let errors = vec![
            AppError::Input("Missing required field: resume".to_string()),
            AppError::Extraction(ExtractionError::Pdf("invalid file header".to_string())),
            AppError::Provider(LlmError::EmptyContent { reason: None }),
        ];

        for err in errors {
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body["error"].is_string());
            assert_eq!(body.as_object().unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_envelope_carries_display_message() {
        let (_, body) = render(AppError::Extraction(ExtractionError::Pdf(
            "invalid file header".to_string(),
        )))
        .await;
        assert_eq!(
            body["error"],
            "Error extracting text from PDF: invalid file header"
        );
    }

    #[test]
    fn test_provider_error_message() {
        let err = AppError::from(LlmError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "AI analysis failed: API error (status 403): API key not valid"
        );
    }
}
