//! End-to-end integration tests for the edugen HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! GenerationService -> recovery chain -> envelope. The provider is a
//! scripted [`TextGenerator`] double, so no network is involved; requests
//! are sent with `tower::ServiceExt::oneshot` without starting a server.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use edugen_server::config::AppConfig;
use edugen_server::llm_provider::{ProviderError, RetryingGenerator, TextGenerator};
use edugen_server::router::build_router;
use edugen_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// A provider double that always returns the same reply.
struct Reply(&'static str);

#[async_trait]
impl TextGenerator for Reply {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        Ok(self.0.to_string())
    }
}

/// A provider double that times out on every attempt, counting them.
struct AlwaysTimeout {
    attempts: Arc<AtomicU32>,
}

#[async_trait]
impl TextGenerator for AlwaysTimeout {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Timeout("operation timed out".to_string()))
    }
}

/// Creates a router whose provider is the given double.
fn test_app(generator: Arc<dyn TextGenerator>) -> Router {
    let state = AppState::with_generator(generator, &AppConfig::for_tests());
    build_router(state)
}

fn app_replying(text: &'static str) -> Router {
    test_app(Arc::new(Reply(text)))
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

fn lesson_plan_request() -> serde_json::Value {
    json!({
        "subject_name": "Mathematics",
        "class_name": "8th",
        "chapter_title": "Linear Equations",
        "number_of_sessions": 4,
        "default_session_duration": "45 minutes"
    })
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_and_health_report_healthy() {
    let app = app_replying("{}");

    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

// ---------------------------------------------------------------------------
// Lesson plan
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lesson_plan_success_from_fenced_reply() {
    // The provider wraps a four-session plan in a markdown fence; the
    // recovery chain must still deliver an ordered array of four objects.
    let app = app_replying(
        "```json\n[\
         {\"sessionNumber\": 1, \"title\": \"Intro\"},\
         {\"sessionNumber\": 2, \"title\": \"Solving\"},\
         {\"sessionNumber\": 3, \"title\": \"Word problems\"},\
         {\"sessionNumber\": 4, \"title\": \"Review\"}\
         ]\n```",
    );

    let (status, body) = post_json(&app, "/api/generate-lesson-plan", lesson_plan_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["error"].is_null());

    let plan = body["data"]["lesson_plan"].as_array().expect("lesson_plan array");
    assert_eq!(plan.len(), 4);
    for (i, session) in plan.iter().enumerate() {
        assert_eq!(session["sessionNumber"], (i + 1) as u64);
    }
}

#[tokio::test]
async fn lesson_plan_parse_failure_returns_raw_response() {
    let prose = "I'm sorry, I can only describe the lesson plan in words.";
    let app = app_replying(prose);

    let (status, body) = post_json(&app, "/api/generate-lesson-plan", lesson_plan_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["raw_response"], prose);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn lesson_plan_transport_failure_has_no_raw_response() {
    let attempts = Arc::new(AtomicU32::new(0));
    let generator = RetryingGenerator::new(
        AlwaysTimeout { attempts: attempts.clone() },
        2,
    );
    let app = test_app(Arc::new(generator));

    let (status, body) = post_json(&app, "/api/generate-lesson-plan", lesson_plan_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("timed out"));
    assert!(body.get("data").is_none());
    // The whole retry budget was spent: one attempt plus two retries.
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn lesson_plan_rejects_empty_subject() {
    let app = app_replying("{}");
    let mut request = lesson_plan_request();
    request["subject_name"] = json!("  ");

    let (status, body) = post_json(&app, "/api/generate-lesson-plan", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("subject_name"));
}

#[tokio::test]
async fn lesson_plan_rejects_zero_sessions() {
    let app = app_replying("{}");
    let mut request = lesson_plan_request();
    request["number_of_sessions"] = json!(0);

    let (status, body) = post_json(&app, "/api/generate-lesson-plan", request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("number_of_sessions"));
}

// ---------------------------------------------------------------------------
// Session content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn session_content_recovers_trailing_comma_reply() {
    // Defective-but-salvageable provider output: fenced and with a
    // trailing comma.
    let app = app_replying("```json\n{\"sessionTitle\": \"Intro\", \"duration\": \"45 minutes\",}\n```");

    let (status, body) = post_json(
        &app,
        "/api/generate-detailed-content-for-session",
        json!({
            "session_data": {
                "title": "Introduction to Linear Equations",
                "summary": "Basic concepts of linear equations",
                "duration": "45 minutes",
                "objectives": ["Understand linear equations", "Solve simple equations"]
            },
            "subject_name": "Mathematics",
            "class_name": "8th"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["session_content"]["sessionTitle"], "Intro");
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn questions_success_returns_questions_payload() {
    let app = app_replying(
        "{\"questions\": [{\"id\": 1, \"questionText\": \"Solve x + 2 = 5\", \"marks\": 2}], \
         \"metadata\": {\"totalQuestions\": 1, \"totalMarks\": 2}}",
    );

    let (status, body) = post_json(
        &app,
        "/api/generate-questions",
        json!({
            "class_name": "8th",
            "subject_name": "Mathematics",
            "chapters": ["Linear Equations"],
            "question_requirements": "1 short answer question"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["questions"]["metadata"]["totalQuestions"], 1);
}

#[tokio::test]
async fn questions_rejects_empty_chapter_list() {
    let app = app_replying("{}");

    let (status, body) = post_json(
        &app,
        "/api/generate-questions",
        json!({
            "class_name": "8th",
            "subject_name": "Mathematics",
            "chapters": [],
            "question_requirements": "anything"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("chapters"));
}

// ---------------------------------------------------------------------------
// Knowledge points
// ---------------------------------------------------------------------------

#[tokio::test]
async fn knowledge_points_success() {
    let app = app_replying(
        "{\"knowledge_points\": [{\"id\": 1, \"title\": \"Laws of reflection\"}], \
         \"metadata\": {\"totalKnowledgePoints\": 1}}",
    );

    let (status, body) = post_json(
        &app,
        "/api/generate-knowledge-points",
        json!({
            "board": "CBSE",
            "grade": "8th",
            "subject": "Science",
            "chapter": "Light",
            "section": "Reflection"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["knowledge_points"]["knowledge_points"][0]["id"],
        1
    );
}

// ---------------------------------------------------------------------------
// Student answers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn student_answer_returns_text_and_updated_history() {
    let app = app_replying("Light travels in straight lines.");

    let (status, body) = post_json(
        &app,
        "/api/get-answers",
        json!({
            "question": "How does light travel?",
            "conversation_history": [
                {"role": "user", "content": "What is light?"},
                {"role": "assistant", "content": "Light is a form of energy."}
            ],
            "subject_name": "Science",
            "class_name": "8th"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let response = &body["data"]["response"];
    assert_eq!(response["answer"], "Light travels in straight lines.");
    assert!(response["conversation_id"].is_string());

    let history = response["updated_history"].as_array().unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[2]["content"], "How does light travel?");
    assert_eq!(history[3]["role"], "assistant");
}

#[tokio::test]
async fn student_answer_transport_failure() {
    let attempts = Arc::new(AtomicU32::new(0));
    let app = test_app(Arc::new(AlwaysTimeout { attempts }));

    let (status, body) = post_json(
        &app,
        "/api/get-answers",
        json!({ "question": "How does light travel?" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body.get("data").is_none());
    assert!(body["error"].as_str().unwrap().contains("timed out"));
}
