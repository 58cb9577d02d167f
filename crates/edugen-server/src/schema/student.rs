//! Schema types for the student tutoring endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One prior exchange in a tutoring conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
}

/// Request for a tutoring answer, with optional conversation context.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentQuestionRequest {
    /// The student's question.
    pub question: String,
    /// Prior exchanges, oldest first.
    #[serde(default)]
    pub conversation_history: Vec<ConversationMessage>,
    /// Optional subject context.
    pub subject_name: Option<String>,
    /// Optional class/grade context.
    pub class_name: Option<String>,
}

/// The tutoring answer plus the updated conversation history the client
/// should send back on the next turn.
#[derive(Debug, Clone, Serialize)]
pub struct StudentAnswerResponse {
    pub answer: String,
    /// Fresh id for this exchange.
    pub conversation_id: Uuid,
    pub updated_history: Vec<ConversationMessage>,
}
