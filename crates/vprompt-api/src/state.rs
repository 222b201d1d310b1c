//! Application state.

use std::sync::Arc;

use vprompt_llm_client::{AnthropicClient, LlmClientConfig, LlmResult, TextGenerator};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(config: ApiConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self { config, generator }
    }

    /// Create state backed by the Anthropic client.
    pub fn with_anthropic(config: ApiConfig, llm_config: LlmClientConfig) -> LlmResult<Self> {
        let client = AnthropicClient::new(llm_config)?;
        Ok(Self::new(config, Arc::new(client)))
    }
}
