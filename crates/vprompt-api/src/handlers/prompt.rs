//! Final video prompt generation.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vprompt_llm_client::{TextRequest, PROMPT_MODEL, PROMPT_MODELS};
use vprompt_models::{validate_generation_request, validate_text, GenerationRequest, ShotCount, VideoPrompt};
use vprompt_parser::{extract_video_prompt, validate_durations, DurationReport};

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::handlers::non_blank;
use crate::metrics;
use crate::services::prompts::{self, VideoPromptInputs};
use crate::services::{generation, VIDEO_SYSTEM_PROMPT};
use crate::state::AppState;

const PROMPT_MAX_TOKENS: u32 = 16000;

const MISSING_FIELDS: &str = "Missing required fields: model, concept, duration, aspectRatio";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePromptRequest {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub prompt_model: Option<String>,
    #[serde(default)]
    pub concept: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub shot_count: Option<ShotCount>,
    #[serde(default)]
    pub image_analysis: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePromptResponse {
    pub success: bool,
    pub data: VideoPrompt,
    pub validation: DurationReport,
}

/// Pick the text model for prompt generation. Unknown values fall back to
/// the default.
fn resolve_prompt_model(requested: Option<&str>) -> &'static str {
    let Some(requested) = requested.map(str::trim).filter(|m| !m.is_empty()) else {
        return PROMPT_MODEL;
    };

    match PROMPT_MODELS.iter().copied().find(|m| *m == requested) {
        Some(model) => model,
        None => {
            warn!(
                requested,
                default = PROMPT_MODEL,
                "Invalid promptModel provided, using default"
            );
            PROMPT_MODEL
        }
    }
}

/// Generate the structured JSON prompt for a chosen concept.
pub async fn generate_prompt(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GeneratePromptRequest>,
) -> ApiResult<Json<GeneratePromptResponse>> {
    let (Some(model), Some(concept), Some(duration), Some(aspect_ratio)) = (
        non_blank(&request.model),
        request.concept.as_deref().filter(|c| !c.is_empty()),
        request.duration.filter(|d| *d != 0.0),
        non_blank(&request.aspect_ratio),
    ) else {
        return Err(ApiError::bad_request(MISSING_FIELDS));
    };

    validate_text("concept", concept, None)?;
    let validated = validate_generation_request(&GenerationRequest {
        model,
        duration,
        aspect_ratio,
        creative_direction: None,
    })?;

    let text_model = resolve_prompt_model(request.prompt_model.as_deref());

    info!(
        model = %validated.model,
        duration = validated.duration_seconds,
        aspect_ratio = %validated.aspect_ratio,
        text_model,
        "Generating video prompt"
    );

    let user_message = prompts::video_prompt_user_message(&VideoPromptInputs {
        model: validated.model,
        duration_seconds: validated.duration_seconds,
        aspect_ratio: validated.aspect_ratio,
        shot_count: request.shot_count.as_ref(),
        concept,
        image_analysis: non_blank(&request.image_analysis),
        image_url: non_blank(&request.image_url),
    });

    let generation_request = TextRequest {
        system_prompt: VIDEO_SYSTEM_PROMPT.to_string(),
        user_message,
        model: text_model.to_string(),
        max_tokens: PROMPT_MAX_TOKENS,
        temperature: 1.0,
    };

    let text = generation::generate_text(state.generator.as_ref(), "prompt", &generation_request)
        .await
        .map_err(|e| ApiError::generation("Failed to generate prompt", e))?;

    let prompt = extract_video_prompt(&text).map_err(|e| {
        metrics::record_malformed_prompt();
        warn!(error = %e, response_chars = text.chars().count(), "Generated prompt could not be parsed");
        ApiError::from(e)
    })?;

    let validation = validate_durations(&prompt);
    if !validation.duration_match {
        metrics::record_duration_mismatch(validated.model.as_str());
    }

    if prompt.resolution.as_deref() != Some(validated.aspect_ratio.as_str()) {
        warn!(
            requested = %validated.aspect_ratio,
            generated = prompt.resolution.as_deref().unwrap_or("<missing>"),
            "Generated resolution differs from requested aspect ratio"
        );
    }

    if !prompt.has_sequential_shot_numbers() {
        warn!(shots = prompt.shots.len(), "Generated shot numbers are not sequential");
    }

    Ok(Json(GeneratePromptResponse {
        success: true,
        data: prompt,
        validation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vprompt_llm_client::FAST_MODEL;

    #[test]
    fn test_resolve_prompt_model() {
        assert_eq!(resolve_prompt_model(None), PROMPT_MODEL);
        assert_eq!(resolve_prompt_model(Some("")), PROMPT_MODEL);
        assert_eq!(resolve_prompt_model(Some(FAST_MODEL)), FAST_MODEL);
        assert_eq!(resolve_prompt_model(Some("gpt-4o")), PROMPT_MODEL);
    }
}
