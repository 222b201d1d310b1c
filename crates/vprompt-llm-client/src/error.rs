//! Generation client error types.

use thiserror::Error;

pub type LlmResult<T> = Result<T, LlmError>;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generation service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected response type from generation service: {0}")]
    UnexpectedResponse(String),

    #[error("Generation service returned no content")]
    EmptyResponse,

    #[error("Generation timed out after {0} seconds")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LlmError::ServiceUnavailable(_) | LlmError::Timeout(_) | LlmError::Network(_)
        )
    }

    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Config(_) => "config",
            LlmError::ServiceUnavailable(_) => "unavailable",
            LlmError::RequestFailed(_) => "request_failed",
            LlmError::UnexpectedResponse(_) => "unexpected_response",
            LlmError::EmptyResponse => "empty_response",
            LlmError::Timeout(_) => "timeout",
            LlmError::Network(_) => "network",
            LlmError::Json(_) => "json",
        }
    }
}
