use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failures of the HTTP boundary itself. Distinct from a fallback guidance
/// reply: these never carry a `response` field.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to process request: malformed body ({0})")]
    MalformedBody(String),

    #[error("failed to process request: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for TransportError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
