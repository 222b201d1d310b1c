//! Instrumented calls into the text generator.

use std::time::Instant;

use tracing::{error, info};
use vprompt_llm_client::{ImageRequest, LlmResult, TextGenerator, TextRequest};

use crate::metrics;

/// Generate text, recording outcome and latency under `operation`.
pub async fn generate_text(
    generator: &dyn TextGenerator,
    operation: &'static str,
    request: &TextRequest,
) -> LlmResult<String> {
    let start = Instant::now();
    let result = generator.generate_text(request).await;
    observe(operation, &request.model, &result, start);
    result
}

/// Analyze an image, recording outcome and latency under `operation`.
pub async fn analyze_image(
    generator: &dyn TextGenerator,
    operation: &'static str,
    request: &ImageRequest,
) -> LlmResult<String> {
    let start = Instant::now();
    let result = generator.analyze_image(request).await;
    observe(operation, &request.model, &result, start);
    result
}

fn observe(operation: &str, model: &str, result: &LlmResult<String>, start: Instant) {
    let elapsed = start.elapsed();

    let outcome = match result {
        Ok(text) => {
            info!(
                operation,
                model,
                response_chars = text.chars().count(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Generation succeeded"
            );
            "success"
        }
        Err(e) => {
            error!(operation, model, error = %e, "Generation failed");
            e.kind()
        }
    };

    metrics::record_generation(operation, outcome, elapsed.as_secs_f64());
}
