//! Process-wide configuration, built once at startup.
//!
//! Environment variables:
//! - `EDUGEN_API_KEY`: provider API credential (required)
//! - `EDUGEN_MODEL`: model identifier (default: "gpt-4o-mini")
//! - `EDUGEN_API_BASE_URL`: OpenAI-compatible base URL
//!   (default: "https://api.openai.com/v1")
//! - `EDUGEN_PORT`: server listen port (default: 8000)
//! - `EDUGEN_TIMEOUT_SECS`: per-request provider timeout (default: 60)
//! - `EDUGEN_MAX_RETRIES`: transport-level retries after the first
//!   attempt (default: 2)

use thiserror::Error;

/// Fatal startup configuration errors. These never occur per-request.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The provider credential is absent or empty.
    #[error("EDUGEN_API_KEY is not set; the server cannot start without a provider credential")]
    MissingApiKey,
}

/// Immutable configuration value constructed once at process start and
/// passed by reference into the orchestrators.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Provider API credential.
    pub api_key: String,
    /// Model identifier sent with every chat completion.
    pub model: String,
    /// Base URL of the OpenAI-compatible provider.
    pub api_base_url: String,
    /// Listen port for the HTTP server.
    pub port: u16,
    /// Per-request timeout for the outbound provider call, in seconds.
    pub timeout_secs: u64,
    /// Transport-level retries after the first attempt.
    pub max_retries: u32,
}

impl AppConfig {
    /// Reads configuration from the environment. A missing or empty API
    /// key is fatal; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("EDUGEN_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(AppConfig {
            api_key,
            model: env_or("EDUGEN_MODEL", "gpt-4o-mini"),
            api_base_url: env_or("EDUGEN_API_BASE_URL", "https://api.openai.com/v1"),
            port: env_parsed("EDUGEN_PORT", 8000),
            timeout_secs: env_parsed("EDUGEN_TIMEOUT_SECS", 60),
            max_retries: env_parsed("EDUGEN_MAX_RETRIES", 2),
        })
    }

    /// A config for tests: dummy credential, no retries, short timeout.
    pub fn for_tests() -> Self {
        AppConfig {
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            api_base_url: "http://localhost:0".to_string(),
            port: 0,
            timeout_secs: 1,
            max_retries: 1,
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
