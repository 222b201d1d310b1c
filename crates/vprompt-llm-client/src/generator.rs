//! Text generation capability.
//!
//! Handlers depend on [`TextGenerator`] rather than a concrete client so the
//! HTTP layer can be driven by a canned generator in tests.

use async_trait::async_trait;
use vprompt_models::ImageMediaType;

use crate::error::LlmResult;

/// Fast model used for storyboards and reference analysis.
pub const FAST_MODEL: &str = "claude-3-5-haiku-20241022";

/// Default model for final prompts and detailed image analysis.
pub const PROMPT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Models a caller may pick for final prompt generation.
pub const PROMPT_MODELS: &[&str] = &[PROMPT_MODEL, FAST_MODEL];

/// Single-turn text generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Image analysis request: one image followed by an instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub image: Vec<u8>,
    pub media_type: ImageMediaType,
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a system prompt and a single user message.
    async fn generate_text(&self, request: &TextRequest) -> LlmResult<String>;

    /// Describe an image according to the request prompt.
    async fn analyze_image(&self, request: &ImageRequest) -> LlmResult<String>;
}
