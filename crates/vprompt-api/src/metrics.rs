//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "vprompt_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "vprompt_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "vprompt_http_requests_in_flight";

    // Generation metrics
    pub const GENERATION_REQUESTS_TOTAL: &str = "vprompt_generation_requests_total";
    pub const GENERATION_DURATION_SECONDS: &str = "vprompt_generation_duration_seconds";

    // Output quality metrics
    pub const CONCEPTS_PARSED_TOTAL: &str = "vprompt_concepts_parsed_total";
    pub const DURATION_MISMATCHES_TOTAL: &str = "vprompt_duration_mismatches_total";
    pub const MALFORMED_PROMPTS_TOTAL: &str = "vprompt_malformed_prompts_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "vprompt_rate_limit_hits_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a generation call and its latency.
pub fn record_generation(operation: &str, outcome: &str, duration_secs: f64) {
    let labels = [
        ("operation", operation.to_string()),
        ("outcome", outcome.to_string()),
    ];
    counter!(names::GENERATION_REQUESTS_TOTAL, &labels).increment(1);

    let labels = [("operation", operation.to_string())];
    histogram!(names::GENERATION_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record concepts parsed from one storyboard response.
pub fn record_concepts_parsed(count: usize) {
    counter!(names::CONCEPTS_PARSED_TOTAL).increment(count as u64);
}

/// Record a prompt whose shot durations disagree with its total.
pub fn record_duration_mismatch(model: &str) {
    let labels = [("model", model.to_string())];
    counter!(names::DURATION_MISMATCHES_TOTAL, &labels).increment(1);
}

/// Record a prompt response that could not be extracted.
pub fn record_malformed_prompt() {
    counter!(names::MALFORMED_PROMPTS_TOTAL).increment(1);
}

/// Record rate limit hit.
pub fn record_rate_limit_hit(endpoint: &str) {
    let labels = [("endpoint", endpoint.to_string())];
    counter!(names::RATE_LIMIT_HITS_TOTAL, &labels).increment(1);
}

/// Route template for the path label; unmatched paths share one label.
fn route_label(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = route_label(&request);
    let start = Instant::now();

    // Increment in-flight counter
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    // Decrement in-flight counter
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}
