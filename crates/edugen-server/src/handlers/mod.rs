//! HTTP handler modules for the edugen API.
//!
//! Each sub-module implements thin handlers that validate the request,
//! delegate to [`GenerationService`](crate::service::GenerationService),
//! and fold the outcome into the fixed response envelope. No orchestration
//! logic lives in handlers.

pub mod health;
pub mod knowledge_points;
pub mod lesson_plan;
pub mod questions;
pub mod session_content;
pub mod student;

use crate::schema::common::ApiResponse;
use crate::service::GenerationError;

/// The Envelope Formatter: maps an orchestrator outcome to the fixed
/// envelope shape. Parsed data lands under `data_key`; a content-parse
/// failure carries the raw provider text; a transport failure carries only
/// the error description.
pub(crate) fn envelope(
    outcome: Result<serde_json::Value, GenerationError>,
    data_key: &str,
    success_message: &str,
    failure_message: &str,
) -> ApiResponse {
    match outcome {
        Ok(parsed) => ApiResponse::ok(
            serde_json::json!({ data_key: parsed }),
            success_message,
        ),
        Err(GenerationError::ContentParse { raw }) => ApiResponse::failure_with_raw(
            "Failed to parse AI response",
            "could not parse response as JSON",
            raw,
        ),
        Err(err @ GenerationError::Transport(_)) => {
            ApiResponse::failure(failure_message, err.to_string())
        }
    }
}
