//! OpenAI-compatible provider chat client behind the [`TextGenerator`]
//! capability.
//!
//! Orchestrators depend on the trait, not the concrete client, so tests can
//! substitute a scripted double. [`OpenAiChatClient`] performs exactly one
//! HTTP attempt with a per-request timeout; [`RetryingGenerator`] wraps any
//! generator with a bounded backoff loop applied to transport-level
//! failures only. A call that completes but returns unusable content is
//! never retried at this layer or any other.

use std::time::Duration;

use async_trait::async_trait;
use backoff::backoff::Backoff;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::AppConfig;

/// Failures completing the outbound provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request exceeded the configured timeout.
    #[error("provider request timed out: {0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("provider connection failed: {0}")]
    Connect(String),

    /// Any other network-level failure.
    #[error("provider network error: {0}")]
    Network(String),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The HTTP exchange completed but the body was not a valid
    /// chat-completion payload.
    #[error("provider response could not be decoded: {0}")]
    MalformedResponse(String),

    /// The payload decoded but carried no assistant content.
    #[error("provider response missing assistant content")]
    MissingContent,
}

impl ProviderError {
    /// Whether another attempt could plausibly succeed. Timeouts,
    /// connection failures, rate limits and server errors qualify; client
    /// rejections and malformed payloads do not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Timeout(_)
            | ProviderError::Connect(_)
            | ProviderError::Network(_) => true,
            ProviderError::Status { status, .. } => {
                *status == 429 || (500..=599).contains(status)
            }
            ProviderError::MalformedResponse(_) | ProviderError::MissingContent => false,
        }
    }
}

/// The injected text-generation capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Runs one chat completion and returns the assistant's text.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError>;
}

/// Wraps a generator with a bounded retry loop for transport failures.
///
/// `max_retries` counts retries after the first attempt, so the budget is
/// at most `max_retries + 1` attempts. Non-retryable errors surface
/// immediately.
pub struct RetryingGenerator<G> {
    inner: G,
    max_retries: u32,
}

impl<G> RetryingGenerator<G> {
    pub fn new(inner: G, max_retries: u32) -> Self {
        RetryingGenerator { inner, max_retries }
    }

    fn retry_policy() -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_interval(Duration::from_millis(500))
            .with_max_interval(Duration::from_secs(5))
            .with_multiplier(2.0)
            .with_max_elapsed_time(None)
            .build()
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for RetryingGenerator<G> {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        let mut policy = Self::retry_policy();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            match self.inner.generate(system_prompt, user_prompt).await {
                Ok(content) => return Ok(content),
                Err(err) => {
                    if !err.is_retryable() || attempt > self.max_retries {
                        return Err(err);
                    }
                    let delay = policy
                        .next_backoff()
                        .unwrap_or_else(|| Duration::from_millis(500));
                    tracing::warn!(
                        attempt,
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        "retryable provider failure, backing off"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

/// Chat client for an OpenAI-compatible `/chat/completions` endpoint.
/// Performs a single attempt per call; compose with [`RetryingGenerator`]
/// for the bounded retry budget.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiChatClient {
    pub fn new(config: &AppConfig) -> Self {
        OpenAiChatClient {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/chat/completions",
                config.api_base_url.trim_end_matches('/')
            ),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiChatClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ]
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::MissingContent)
    }
}

fn classify_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(err.to_string())
    } else if err.is_connect() {
        ProviderError::Connect(err.to_string())
    } else {
        ProviderError::Network(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
