//! Text generation client.
//!
//! Exposes the [`TextGenerator`] capability used by the API handlers and an
//! Anthropic Messages API implementation of it. Every call is bounded by a
//! timeout; retrying on transient failures is opt-in.

pub mod client;
pub mod error;
pub mod generator;
pub mod types;

pub use client::{AnthropicClient, LlmClientConfig};
pub use error::{LlmError, LlmResult};
pub use generator::{
    ImageRequest, TextGenerator, TextRequest, FAST_MODEL, PROMPT_MODEL, PROMPT_MODELS,
};
