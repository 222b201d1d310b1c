//! Axum HTTP API server.
//!
//! This crate provides:
//! - Storyboard concept generation and parsing
//! - Structured video prompt generation with duration validation
//! - Reference image analysis
//! - Rate limiting, security headers and Prometheus metrics

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
