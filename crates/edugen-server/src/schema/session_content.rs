//! Schema types for detailed session content generation.

use serde::Deserialize;

use super::lesson_plan::SessionData;

/// Request to expand one lesson-plan session into full teaching content.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionContentRequest {
    /// The session to expand (title, summary, duration, objectives).
    pub session_data: SessionData,
    /// Subject name, for age-appropriate content.
    pub subject_name: String,
    /// Class/grade.
    pub class_name: String,
}
