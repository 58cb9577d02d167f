//! Schema types for knowledge point decomposition.

use serde::Deserialize;

/// Request to decompose a curriculum chapter into atomic knowledge points.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgePointRequest {
    /// Curriculum board (e.g. "CBSE").
    pub board: String,
    /// Grade (e.g. "8th").
    pub grade: String,
    /// Subject name.
    pub subject: String,
    /// Chapter to decompose.
    pub chapter: String,
    /// Optional section within the chapter.
    pub section: Option<String>,
}
