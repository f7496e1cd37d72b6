//! HTTP error mapping.
//!
//! Failures are rendered with the same shape the upstream uses for its
//! envelopes: `{ "statusCode", "statusMessage", "message" }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Catalog acquisition failed.
    #[error(transparent)]
    Core(#[from] skills_core::Error),

    /// A redirect target could not be used as a `Location` header.
    #[error("invalid redirect target: {0}")]
    InvalidRedirect(String),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Upstream failures are a bad gateway; everything else is ours.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(err) if err.is_upstream() => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), error = %self, "Request failed");

        let body = json!({
            "statusCode": status.as_u16(),
            "statusMessage": status.canonical_reason().unwrap_or_default(),
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
