//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] covers the failures that reject a request before (or
//! outside) orchestration: malformed input and unexpected internal
//! failures. Orchestrator failures (transport, content-parse) are not
//! errors at the HTTP layer; handlers fold them into a `success=false`
//! envelope with status 200.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::schema::common::ApiResponse;

/// Request-rejecting API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request (400): a required field is missing or empty.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = ApiResponse::failure(message, self.to_string());
        (status, axum::Json(body)).into_response()
    }
}

/// Rejects empty or whitespace-only required fields with a uniform message.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("'{field}' must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_non_empty_accepts_text() {
        assert!(require_non_empty("subject_name", "Mathematics").is_ok());
    }

    #[test]
    fn require_non_empty_rejects_whitespace() {
        let err = require_non_empty("subject_name", "   ").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(err.to_string().contains("subject_name"));
    }
}
