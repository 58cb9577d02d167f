//! Detailed session content handler.

use axum::extract::State;
use axum::Json;

use crate::error::{require_non_empty, ApiError};
use crate::handlers::envelope;
use crate::schema::common::ApiResponse;
use crate::schema::session_content::SessionContentRequest;
use crate::state::AppState;

/// `POST /api/generate-detailed-content-for-session`
///
/// Expands one session of a previously generated lesson plan into full
/// teaching content (introduction, main content, activities, assessment,
/// resources, differentiation).
pub async fn generate_session_content(
    State(state): State<AppState>,
    Json(req): Json<SessionContentRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    require_non_empty("subject_name", &req.subject_name)?;
    require_non_empty("class_name", &req.class_name)?;
    require_non_empty("session_data.title", &req.session_data.title)?;

    tracing::info!(session = %req.session_data.title, "generating session content");

    let outcome = state
        .generation
        .generate_session_content(&req.session_data, &req.subject_name, &req.class_name)
        .await;

    Ok(Json(envelope(
        outcome,
        "session_content",
        "Session content generated successfully",
        "Failed to generate session content",
    )))
}
