//! Anthropic Messages API client.

use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::{LlmError, LlmResult};
use crate::generator::{ImageRequest, TextGenerator, TextRequest};
use crate::types::{
    ApiErrorResponse, ImageSource, Message, MessagesRequest, MessagesResponse, RequestBlock,
    ResponseBlock,
};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_API_VERSION: &str = "2023-06-01";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the generation client.
#[derive(Clone)]
pub struct LlmClientConfig {
    pub api_key: String,
    /// Base URL of the Messages API, without the `/v1/messages` path
    pub base_url: String,
    /// Value of the `anthropic-version` header
    pub api_version: String,
    /// Upper bound for a single generation call
    pub timeout: Duration,
    /// Retries on retryable failures; 0 disables retrying
    pub max_retries: u32,
}

impl fmt::Debug for LlmClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl LlmClientConfig {
    /// Config with default endpoint, 60 second timeout and no retries.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: 0,
        }
    }

    /// Create config from environment variables.
    ///
    /// `ANTHROPIC_API_KEY` is required.
    pub fn from_env() -> LlmResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LlmResult<Self> {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::Config("ANTHROPIC_API_KEY is not set".to_string()))?;

        Ok(Self {
            api_key,
            base_url: lookup("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version: lookup("ANTHROPIC_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout: Duration::from_secs(
                lookup("GENERATION_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            max_retries: lookup("GENERATION_MAX_RETRIES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// Client for the Anthropic Messages API.
pub struct AnthropicClient {
    http: Client,
    config: LlmClientConfig,
}

impl AnthropicClient {
    /// Create a new client.
    pub fn new(config: LlmClientConfig) -> LlmResult<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> LlmResult<Self> {
        Self::new(LlmClientConfig::from_env()?)
    }

    pub fn config(&self) -> &LlmClientConfig {
        &self.config
    }

    /// Send a Messages request and return the first text block.
    async fn create_message(&self, request: &MessagesRequest<'_>) -> LlmResult<String> {
        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));
        let started = Instant::now();

        debug!(model = request.model, max_tokens = request.max_tokens, "Sending generation request");

        let text = self
            .with_retry(|| async {
                match tokio::time::timeout(self.config.timeout, self.post(&url, request)).await {
                    Ok(result) => result,
                    Err(_) => Err(LlmError::Timeout(self.config.timeout.as_secs())),
                }
            })
            .await?;

        debug!(
            model = request.model,
            response_chars = text.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Generation completed"
        );

        Ok(text)
    }

    async fn post(&self, url: &str, request: &MessagesRequest<'_>) -> LlmResult<String> {
        let response = self
            .http
            .post(url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| format!("{}: {}", e.error.kind, e.error.message))
                .unwrap_or(body);
            let detail = format!("Generation service returned {}: {}", status, message);

            return Err(if is_unavailable(status) {
                LlmError::ServiceUnavailable(detail)
            } else {
                LlmError::RequestFailed(detail)
            });
        }

        let parsed: MessagesResponse = serde_json::from_str(&body)?;
        if let Some(reason) = parsed.stop_reason.as_deref() {
            if reason == "max_tokens" {
                warn!(model = request.model, "Generation stopped at max_tokens");
            }
        }

        first_text(parsed)
    }

    /// Execute with retry logic.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> LlmResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = LlmResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    warn!(
                        "Generation request failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or(LlmError::RequestFailed("Unknown error".to_string())))
    }
}

fn is_unavailable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn first_text(response: MessagesResponse) -> LlmResult<String> {
    match response.content.into_iter().next() {
        Some(ResponseBlock::Text { text }) => Ok(text),
        Some(ResponseBlock::Other) => Err(LlmError::UnexpectedResponse(
            "first content block is not text".to_string(),
        )),
        None => Err(LlmError::EmptyResponse),
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    async fn generate_text(&self, request: &TextRequest) -> LlmResult<String> {
        let body = MessagesRequest {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: Some(request.temperature),
            system: Some(&request.system_prompt),
            messages: vec![Message::user(vec![RequestBlock::Text {
                text: &request.user_message,
            }])],
        };

        self.create_message(&body).await
    }

    async fn analyze_image(&self, request: &ImageRequest) -> LlmResult<String> {
        let source = ImageSource::base64(request.media_type.as_str(), BASE64.encode(&request.image));
        let body = MessagesRequest {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: None,
            system: None,
            messages: vec![Message::user(vec![
                RequestBlock::Image { source },
                RequestBlock::Text {
                    text: &request.prompt,
                },
            ])],
        };

        self.create_message(&body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = LlmClientConfig::new("key");
        assert_eq!(config.base_url, "https://api.anthropic.com");
        assert_eq!(config.api_version, "2023-06-01");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_config_requires_api_key() {
        let err = LlmClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, LlmError::Config(_)));

        let err = LlmClientConfig::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "  ")]))
            .unwrap_err();
        assert!(matches!(err, LlmError::Config(_)));
    }

    #[test]
    fn test_config_from_lookup_overrides() {
        let config = LlmClientConfig::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_BASE_URL", "http://localhost:9999"),
            ("GENERATION_TIMEOUT_SECS", "5"),
            ("GENERATION_MAX_RETRIES", "2"),
            ("ANTHROPIC_VERSION", "not-a-number-is-fine"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.api_version, "not-a-number-is-fine");
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let debug = format!("{:?}", LlmClientConfig::new("sk-secret"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn test_is_unavailable() {
        assert!(is_unavailable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_unavailable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_unavailable(StatusCode::BAD_REQUEST));
        assert!(!is_unavailable(StatusCode::UNAUTHORIZED));
    }
}
