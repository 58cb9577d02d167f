//! GenerationService: the single coordinator between HTTP handlers and the
//! provider/repair layers.
//!
//! All orchestration flows through [`GenerationService`]. Handlers are thin
//! wrappers that validate input, delegate here, and fold the outcome into
//! the response envelope. Each provider call emits one structured log
//! record ({operation, duration_ms, approx_chars, outcome}) regardless of
//! how it ends; the record never influences control flow.

use std::sync::Arc;
use std::time::Instant;

use edugen_extract::{extract, RecoveryMethod};
use serde_json::Value;

use crate::config::AppConfig;
use crate::llm_provider::{ProviderError, TextGenerator};
use crate::prompts;
use crate::schema::lesson_plan::SessionData;
use crate::schema::student::ConversationMessage;

/// Orchestrator failures. Transport errors were already retried within the
/// provider client's budget; content-parse failures are never retried.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The outbound provider call did not complete.
    #[error("{0}")]
    Transport(#[from] ProviderError),

    /// The call completed but no structured data could be recovered.
    /// Carries the raw provider text for caller-side debugging.
    #[error("could not parse response as JSON")]
    ContentParse { raw: String },
}

/// The Request Orchestrators: one method per content type, all sharing the
/// injected [`TextGenerator`] capability. Holds no mutable state; concurrent
/// calls never interfere.
pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextGenerator>, config: &AppConfig) -> Self {
        GenerationService {
            generator,
            model: config.model.clone(),
        }
    }

    /// Generates a multi-session lesson plan for one chapter.
    pub async fn generate_lesson_plan(
        &self,
        subject_name: &str,
        class_name: &str,
        chapter_title: &str,
        number_of_sessions: u32,
        default_session_duration: &str,
    ) -> Result<Value, GenerationError> {
        let user = prompts::lesson_plan_prompt(
            subject_name,
            class_name,
            chapter_title,
            number_of_sessions,
            default_session_duration,
        );
        self.generate_structured("generate_lesson_plan", prompts::LESSON_PLAN_SYSTEM, user)
            .await
    }

    /// Expands one lesson-plan session into full teaching content.
    pub async fn generate_session_content(
        &self,
        session: &SessionData,
        subject_name: &str,
        class_name: &str,
    ) -> Result<Value, GenerationError> {
        let user = prompts::session_content_prompt(session, subject_name, class_name);
        self.generate_structured(
            "generate_session_content",
            prompts::SESSION_CONTENT_SYSTEM,
            user,
        )
        .await
    }

    /// Generates a question set over one or more chapters.
    pub async fn generate_questions(
        &self,
        class_name: &str,
        subject_name: &str,
        chapters: &[String],
        question_requirements: &str,
    ) -> Result<Value, GenerationError> {
        let user =
            prompts::questions_prompt(class_name, subject_name, chapters, question_requirements);
        self.generate_structured("generate_questions", prompts::QUESTIONS_SYSTEM, user)
            .await
    }

    /// Decomposes a curriculum chapter into atomic knowledge points.
    pub async fn generate_knowledge_points(
        &self,
        board: &str,
        grade: &str,
        subject: &str,
        chapter: &str,
        section: Option<&str>,
    ) -> Result<Value, GenerationError> {
        let user = prompts::knowledge_points_prompt(board, grade, subject, chapter, section);
        self.generate_structured(
            "generate_knowledge_points",
            prompts::KNOWLEDGE_POINTS_SYSTEM,
            user,
        )
        .await
    }

    /// Answers a student question with conversation context. The reply is
    /// free text; no JSON recovery applies.
    pub async fn answer_student_question(
        &self,
        question: &str,
        history: &[ConversationMessage],
        subject_name: Option<&str>,
        class_name: Option<&str>,
    ) -> Result<String, GenerationError> {
        let system = prompts::student_tutor_system(subject_name, class_name);
        let user = prompts::student_question_prompt(question, history);

        let started = Instant::now();
        let prompt_chars = system.len() + user.len();
        match self.generator.generate(&system, &user).await {
            Ok(answer) => {
                log_call(
                    "get_student_answer",
                    &self.model,
                    started,
                    prompt_chars + answer.len(),
                    "ok",
                    None,
                );
                Ok(answer)
            }
            Err(err) => {
                log_call(
                    "get_student_answer",
                    &self.model,
                    started,
                    prompt_chars,
                    "transport_error",
                    None,
                );
                Err(GenerationError::Transport(err))
            }
        }
    }

    /// Shared path for the JSON-producing operations: provider call, then
    /// the repair chain.
    async fn generate_structured(
        &self,
        operation: &'static str,
        system: &str,
        user: String,
    ) -> Result<Value, GenerationError> {
        let started = Instant::now();
        let prompt_chars = system.len() + user.len();

        let raw = match self.generator.generate(system, &user).await {
            Ok(raw) => raw,
            Err(err) => {
                log_call(
                    operation,
                    &self.model,
                    started,
                    prompt_chars,
                    "transport_error",
                    None,
                );
                return Err(GenerationError::Transport(err));
            }
        };

        let approx_chars = prompt_chars + raw.len();
        let (parsed, method) = extract(&raw);
        match parsed {
            Some(value) => {
                log_call(operation, &self.model, started, approx_chars, "ok", Some(method));
                Ok(value)
            }
            None => {
                log_call(
                    operation,
                    &self.model,
                    started,
                    approx_chars,
                    "parse_error",
                    Some(method),
                );
                Err(GenerationError::ContentParse { raw })
            }
        }
    }
}

fn log_call(
    operation: &'static str,
    model: &str,
    started: Instant,
    approx_chars: usize,
    outcome: &str,
    recovery: Option<RecoveryMethod>,
) {
    let duration_ms = started.elapsed().as_millis() as u64;
    match recovery {
        Some(method) => tracing::info!(
            operation,
            model,
            duration_ms,
            approx_chars,
            outcome,
            recovery = method.as_str(),
            "provider call finished"
        ),
        None => tracing::info!(
            operation,
            model,
            duration_ms,
            approx_chars,
            outcome,
            "provider call finished"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    enum Script {
        Reply(&'static str),
        Timeout,
    }

    #[async_trait]
    impl TextGenerator for Script {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
            match self {
                Script::Reply(text) => Ok((*text).to_string()),
                Script::Timeout => Err(ProviderError::Timeout("deadline exceeded".to_string())),
            }
        }
    }

    fn service(script: Script) -> GenerationService {
        GenerationService::new(Arc::new(script), &AppConfig::for_tests())
    }

    #[tokio::test]
    async fn fenced_reply_is_recovered() {
        let svc = service(Script::Reply("```json\n[{\"sessionNumber\": 1}]\n```"));
        let value = svc
            .generate_lesson_plan("Mathematics", "8th", "Linear Equations", 1, "45 minutes")
            .await
            .unwrap();
        assert_eq!(value, serde_json::json!([{"sessionNumber": 1}]));
    }

    #[tokio::test]
    async fn unparseable_reply_preserves_raw_text() {
        let svc = service(Script::Reply("I cannot answer that."));
        let err = svc
            .generate_questions("8th", "Mathematics", &["Algebra".to_string()], "3 questions")
            .await
            .unwrap_err();
        match err {
            GenerationError::ContentParse { raw } => assert_eq!(raw, "I cannot answer that."),
            other => panic!("expected ContentParse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced() {
        let svc = service(Script::Timeout);
        let err = svc
            .generate_knowledge_points("CBSE", "8th", "Science", "Light", None)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn student_answer_passes_text_through() {
        let svc = service(Script::Reply("Light travels in straight lines."));
        let answer = svc
            .answer_student_question("What is light?", &[], Some("Physics"), None)
            .await
            .unwrap();
        assert_eq!(answer, "Light travels in straight lines.");
    }
}
