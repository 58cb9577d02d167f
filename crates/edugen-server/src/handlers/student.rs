//! Student tutoring handler.

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::error::{require_non_empty, ApiError};
use crate::schema::common::ApiResponse;
use crate::schema::student::{
    ConversationMessage, StudentAnswerResponse, StudentQuestionRequest,
};
use crate::state::AppState;

/// `POST /api/get-answers`
///
/// Answers a student question with conversation context. The reply is free
/// text; the response carries the updated history the client sends back on
/// the next turn.
pub async fn get_student_answer(
    State(state): State<AppState>,
    Json(req): Json<StudentQuestionRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    require_non_empty("question", &req.question)?;

    tracing::info!(history_len = req.conversation_history.len(), "answering student question");

    let outcome = state
        .generation
        .answer_student_question(
            &req.question,
            &req.conversation_history,
            req.subject_name.as_deref(),
            req.class_name.as_deref(),
        )
        .await;

    let answer = match outcome {
        Ok(answer) => answer,
        Err(err) => {
            return Ok(Json(ApiResponse::failure(
                "Failed to get answer from AI service",
                err.to_string(),
            )));
        }
    };

    let mut updated_history = req.conversation_history;
    updated_history.push(ConversationMessage {
        role: "user".to_string(),
        content: req.question,
    });
    updated_history.push(ConversationMessage {
        role: "assistant".to_string(),
        content: answer.clone(),
    });

    let response = StudentAnswerResponse {
        answer,
        conversation_id: Uuid::new_v4(),
        updated_history,
    };

    Ok(Json(ApiResponse::ok(
        serde_json::json!({ "response": response }),
        "Answer generated successfully",
    )))
}
