//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` with rejections rendered as [`ApiError`]: a missing or
/// non-JSON `Content-Type` becomes 415, malformed bodies become 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
