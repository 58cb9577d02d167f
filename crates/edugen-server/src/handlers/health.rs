//! Health check handlers.

use axum::Json;

use crate::schema::health::HealthResponse;

/// `GET /`
pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "edugen API is running".to_string(),
    })
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API is operational".to_string(),
    })
}
