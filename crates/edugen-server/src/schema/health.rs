//! Schema types for the health endpoints.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving.
    pub status: String,
    /// Human-readable status line.
    pub message: String,
}
