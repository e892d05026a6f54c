use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failures at the HTTP boundary itself. Everything user-facing about
/// a failed lookup travels as reply text instead; Telegram only sees
/// an error status when the webhook path or payload is wrong.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Secret segment did not match; indistinguishable from an
    /// unknown path.
    #[error("not found")]
    UnknownWebhookPath,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnknownWebhookPath => StatusCode::NOT_FOUND,
        };
        (
            status,
            Json(json!({ "error": "not_found", "message": self.to_string() })),
        )
            .into_response()
    }
}
