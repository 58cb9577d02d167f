//! Question set generation handler.

use axum::extract::State;
use axum::Json;

use crate::error::{require_non_empty, ApiError};
use crate::handlers::envelope;
use crate::schema::common::ApiResponse;
use crate::schema::questions::QuestionGenerationRequest;
use crate::state::AppState;

/// `POST /api/generate-questions`
///
/// Creates a question set covering the requested chapters with mixed
/// difficulty levels and question types.
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(req): Json<QuestionGenerationRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    require_non_empty("class_name", &req.class_name)?;
    require_non_empty("subject_name", &req.subject_name)?;
    require_non_empty("question_requirements", &req.question_requirements)?;
    if req.chapters.iter().all(|chapter| chapter.trim().is_empty()) {
        return Err(ApiError::BadRequest(
            "'chapters' must contain at least one chapter".to_string(),
        ));
    }

    tracing::info!(
        subject = %req.subject_name,
        class = %req.class_name,
        chapters = req.chapters.len(),
        "generating questions"
    );

    let outcome = state
        .generation
        .generate_questions(
            &req.class_name,
            &req.subject_name,
            &req.chapters,
            &req.question_requirements,
        )
        .await;

    Ok(Json(envelope(
        outcome,
        "questions",
        "Questions generated successfully",
        "Failed to generate questions",
    )))
}
