//! Knowledge point decomposition handler.

use axum::extract::State;
use axum::Json;

use crate::error::{require_non_empty, ApiError};
use crate::handlers::envelope;
use crate::schema::common::ApiResponse;
use crate::schema::knowledge_points::KnowledgePointRequest;
use crate::state::AppState;

/// `POST /api/generate-knowledge-points`
///
/// Decomposes a curriculum chapter into atomic, teachable, assessable
/// knowledge points tagged with Bloom's taxonomy levels.
pub async fn generate_knowledge_points(
    State(state): State<AppState>,
    Json(req): Json<KnowledgePointRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    require_non_empty("board", &req.board)?;
    require_non_empty("grade", &req.grade)?;
    require_non_empty("subject", &req.subject)?;
    require_non_empty("chapter", &req.chapter)?;

    tracing::info!(
        board = %req.board,
        subject = %req.subject,
        chapter = %req.chapter,
        "generating knowledge points"
    );

    let outcome = state
        .generation
        .generate_knowledge_points(
            &req.board,
            &req.grade,
            &req.subject,
            &req.chapter,
            req.section.as_deref(),
        )
        .await;

    Ok(Json(envelope(
        outcome,
        "knowledge_points",
        "Knowledge points generated successfully",
        "Failed to generate knowledge points",
    )))
}
