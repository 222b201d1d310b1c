//! Storyboard concept generation.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vprompt_llm_client::{TextRequest, FAST_MODEL};
use vprompt_models::{validate_creative_direction, Concept};
use vprompt_parser::parse_concepts;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::handlers::non_blank;
use crate::metrics;
use crate::services::{generation, prompts, STORYBOARD_SYSTEM_PROMPT};
use crate::state::AppState;

/// Target video length when the request does not name one.
pub const DEFAULT_TARGET_DURATION_SECS: f64 = 6.0;

const CONCEPTS_MAX_TOKENS: u32 = 8192;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConceptsRequest {
    #[serde(default)]
    pub creative_direction: Option<String>,
    #[serde(default)]
    pub image_analysis: Option<String>,
    #[serde(default)]
    pub target_duration: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConceptsResponse {
    pub success: bool,
    pub concepts_markdown: String,
    pub concepts: Vec<Concept>,
}

/// Generate three storyboard concepts from a creative direction.
pub async fn generate_concepts(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateConceptsRequest>,
) -> ApiResult<Json<GenerateConceptsResponse>> {
    let creative_direction = request.creative_direction.as_deref().unwrap_or_default();
    validate_creative_direction(creative_direction)?;

    let target_duration = match request.target_duration {
        None => DEFAULT_TARGET_DURATION_SECS,
        Some(d) if d.is_finite() && d > 0.0 => d,
        Some(_) => return Err(ApiError::bad_request("targetDuration must be a positive number")),
    };
    let image_analysis = non_blank(&request.image_analysis);

    info!(
        creative_direction_chars = creative_direction.chars().count(),
        has_image_analysis = image_analysis.is_some(),
        target_duration,
        "Generating storyboard concepts"
    );

    let generation_request = TextRequest {
        system_prompt: STORYBOARD_SYSTEM_PROMPT.to_string(),
        user_message: prompts::concepts_user_message(
            creative_direction,
            target_duration,
            image_analysis,
        ),
        model: FAST_MODEL.to_string(),
        max_tokens: CONCEPTS_MAX_TOKENS,
        temperature: 1.0,
    };

    let markdown = generation::generate_text(state.generator.as_ref(), "concepts", &generation_request)
        .await
        .map_err(|e| ApiError::generation("Failed to generate concepts", e))?;

    let concepts = parse_concepts(&markdown);
    metrics::record_concepts_parsed(concepts.len());

    if concepts.is_empty() {
        warn!(
            response_chars = markdown.chars().count(),
            "No concepts found in storyboard response"
        );
    } else {
        info!(
            concepts = concepts.len(),
            scenes = ?concepts.iter().map(Concept::scene_count).collect::<Vec<_>>(),
            "Parsed storyboard concepts"
        );
    }

    Ok(Json(GenerateConceptsResponse {
        success: true,
        concepts_markdown: markdown,
        concepts,
    }))
}
