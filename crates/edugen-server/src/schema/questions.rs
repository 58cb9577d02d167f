//! Schema types for question set generation.

use serde::Deserialize;

/// Request to generate a question set over one or more chapters.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionGenerationRequest {
    /// Class/grade (e.g. "5th", "10th").
    pub class_name: String,
    /// Subject name.
    pub subject_name: String,
    /// Chapters to cover. Must be non-empty.
    pub chapters: Vec<String>,
    /// Free-text requirements (count, mix of types, difficulty spread).
    pub question_requirements: String,
}
