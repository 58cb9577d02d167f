//! Schema types for lesson plan generation.

use serde::{Deserialize, Serialize};

/// Request to generate a multi-session lesson plan for one chapter.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonPlanRequest {
    /// Subject name (e.g. "Mathematics", "Science").
    pub subject_name: String,
    /// Class/grade (e.g. "5th", "10th").
    pub class_name: String,
    /// Chapter title the plan covers.
    pub chapter_title: String,
    /// Number of sessions the chapter is split into. Must be positive.
    pub number_of_sessions: u32,
    /// Default per-session duration (e.g. "45 minutes").
    pub default_session_duration: String,
}

/// One session of a previously generated lesson plan, as sent back by the
/// client when requesting detailed content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub title: String,
    pub summary: String,
    pub duration: String,
    pub objectives: Vec<String>,
}
