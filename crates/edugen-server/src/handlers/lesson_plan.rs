//! Lesson plan generation handler.

use axum::extract::State;
use axum::Json;

use crate::error::{require_non_empty, ApiError};
use crate::handlers::envelope;
use crate::schema::common::ApiResponse;
use crate::schema::lesson_plan::LessonPlanRequest;
use crate::state::AppState;

/// `POST /api/generate-lesson-plan`
///
/// Creates a structured lesson plan with one entry per session for the
/// given subject, class and chapter.
pub async fn generate_lesson_plan(
    State(state): State<AppState>,
    Json(req): Json<LessonPlanRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    require_non_empty("subject_name", &req.subject_name)?;
    require_non_empty("class_name", &req.class_name)?;
    require_non_empty("chapter_title", &req.chapter_title)?;
    require_non_empty("default_session_duration", &req.default_session_duration)?;
    if req.number_of_sessions == 0 {
        return Err(ApiError::BadRequest(
            "'number_of_sessions' must be positive".to_string(),
        ));
    }

    tracing::info!(
        subject = %req.subject_name,
        chapter = %req.chapter_title,
        sessions = req.number_of_sessions,
        "generating lesson plan"
    );

    let outcome = state
        .generation
        .generate_lesson_plan(
            &req.subject_name,
            &req.class_name,
            &req.chapter_title,
            req.number_of_sessions,
            &req.default_session_duration,
        )
        .await;

    Ok(Json(envelope(
        outcome,
        "lesson_plan",
        "Lesson plan generated successfully",
        "Failed to generate lesson plan",
    )))
}
