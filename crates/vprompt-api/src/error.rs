//! API error types.
//!
//! Client errors render as `{ "error": message }`. Generation failures
//! render as `{ "error": summary, "details": message }` where the summary
//! names the failed operation.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use vprompt_llm_client::LlmError;
use vprompt_models::{MediaTypeError, RequestRejection};
use vprompt_parser::MalformedPromptError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(#[from] RequestRejection),

    #[error("{0}")]
    UnsupportedMediaType(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("{summary}: {source}")]
    Generation {
        summary: &'static str,
        #[source]
        source: LlmError,
    },

    #[error("Failed to generate prompt: {0}")]
    MalformedPrompt(#[from] MalformedPromptError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Wrap a generation failure with the summary of the failed operation.
    pub fn generation(summary: &'static str, source: LlmError) -> Self {
        Self::Generation { summary, source }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Generation { .. } | ApiError::MalformedPrompt(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Operation summary and underlying message for 500 responses.
    fn server_error_parts(&self) -> Option<(&'static str, String)> {
        match self {
            ApiError::Generation { summary, source } => Some((*summary, source.to_string())),
            ApiError::MalformedPrompt(e) => Some(("Failed to generate prompt", e.to_string())),
            _ => None,
        }
    }
}

impl From<MediaTypeError> for ApiError {
    fn from(err: MediaTypeError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::UnsupportedMediaType("Content-Type must be application/json".to_string())
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self.server_error_parts() {
            Some((summary, details)) => {
                // Don't expose internal error details in production
                let details = if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    details
                };
                ErrorResponse {
                    error: summary.to_string(),
                    details: Some(details),
                }
            }
            None => ErrorResponse {
                error: self.to_string(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
