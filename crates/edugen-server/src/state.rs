//! Application state shared across handler tasks.
//!
//! Everything in [`AppState`] is immutable after startup, so handlers clone
//! it freely and no locking exists anywhere in the request path. The single
//! suspension point per request is the outbound provider call.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm_provider::{OpenAiChatClient, RetryingGenerator, TextGenerator};
use crate::service::GenerationService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The orchestrator service.
    pub generation: Arc<GenerationService>,
}

impl AppState {
    /// Production state: the real provider client wrapped with the
    /// configured transport-retry budget.
    pub fn new(config: &AppConfig) -> Self {
        let client: Arc<dyn TextGenerator> = Arc::new(RetryingGenerator::new(
            OpenAiChatClient::new(config),
            config.max_retries,
        ));
        AppState {
            generation: Arc::new(GenerationService::new(client, config)),
        }
    }

    /// State with an injected generator, for tests.
    pub fn with_generator(generator: Arc<dyn TextGenerator>, config: &AppConfig) -> Self {
        AppState {
            generation: Arc::new(GenerationService::new(generator, config)),
        }
    }
}
