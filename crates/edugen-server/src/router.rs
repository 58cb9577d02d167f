//! Router assembly for the edugen HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive (the teaching frontends call from various origins).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        // Content generation
        .route(
            "/api/generate-lesson-plan",
            post(handlers::lesson_plan::generate_lesson_plan),
        )
        .route(
            "/api/generate-detailed-content-for-session",
            post(handlers::session_content::generate_session_content),
        )
        .route(
            "/api/generate-questions",
            post(handlers::questions::generate_questions),
        )
        .route(
            "/api/generate-knowledge-points",
            post(handlers::knowledge_points::generate_knowledge_points),
        )
        // Student tutoring
        .route("/api/get-answers", post(handlers::student::get_student_answer))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
