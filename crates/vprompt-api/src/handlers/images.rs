//! Image analysis handlers.

use axum::extract::State;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::info;
use vprompt_llm_client::{ImageRequest, FAST_MODEL, PROMPT_MODEL};
use vprompt_models::ImageMediaType;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::handlers::non_blank;
use crate::services::{generation, prompts};
use crate::state::AppState;

const IMAGE_ANALYSIS_MAX_TOKENS: u32 = 4096;
const REFERENCE_ANALYSIS_MAX_TOKENS: u32 = 2048;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub image_media_type: Option<String>,
    /// Only used by `/analyze-reference`
    #[serde(default)]
    pub creative_direction: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeImageResponse {
    pub success: bool,
    pub analysis: String,
}

/// Decoded image bytes plus their media type.
#[derive(Debug)]
struct DecodedImage {
    bytes: Vec<u8>,
    media_type: ImageMediaType,
}

/// Decode the request image. A data-URL prefix up to `base64,` is dropped;
/// a missing media type means JPEG.
fn decode_image(request: &AnalyzeImageRequest) -> ApiResult<DecodedImage> {
    let encoded = non_blank(&request.image_base64)
        .ok_or_else(|| ApiError::bad_request("Valid imageBase64 is required"))?;

    let payload = match encoded.find("base64,") {
        Some(idx) => &encoded[idx + "base64,".len()..],
        None => encoded,
    };

    let media_type = match non_blank(&request.image_media_type) {
        Some(value) => value.trim().parse::<ImageMediaType>()?,
        None => ImageMediaType::default(),
    };

    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|e| ApiError::bad_request(format!("imageBase64 is not valid base64: {}", e)))?;

    if bytes.is_empty() {
        return Err(ApiError::bad_request("Valid imageBase64 is required"));
    }

    Ok(DecodedImage { bytes, media_type })
}

/// Extract a detailed visual analysis for prompt generation.
pub async fn analyze_image(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeImageRequest>,
) -> ApiResult<Json<AnalyzeImageResponse>> {
    let image = decode_image(&request)?;

    info!(
        media_type = %image.media_type,
        image_bytes = image.bytes.len(),
        "Analyzing image"
    );

    let analysis_request = ImageRequest {
        image: image.bytes,
        media_type: image.media_type,
        prompt: prompts::IMAGE_ANALYSIS_PROMPT.to_string(),
        model: PROMPT_MODEL.to_string(),
        max_tokens: IMAGE_ANALYSIS_MAX_TOKENS,
    };

    let analysis = generation::analyze_image(state.generator.as_ref(), "analyze_image", &analysis_request)
        .await
        .map_err(|e| ApiError::generation("Failed to analyze image", e))?;

    Ok(Json(AnalyzeImageResponse {
        success: true,
        analysis,
    }))
}

/// Summarize a reference image for storyboarding, optionally steered by a
/// creative direction.
pub async fn analyze_reference(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeImageRequest>,
) -> ApiResult<Json<AnalyzeImageResponse>> {
    let image = decode_image(&request)?;
    let creative_direction = non_blank(&request.creative_direction);

    info!(
        media_type = %image.media_type,
        image_bytes = image.bytes.len(),
        has_creative_direction = creative_direction.is_some(),
        "Analyzing reference image"
    );

    let analysis_request = ImageRequest {
        image: image.bytes,
        media_type: image.media_type,
        prompt: prompts::reference_analysis_prompt(creative_direction),
        model: FAST_MODEL.to_string(),
        max_tokens: REFERENCE_ANALYSIS_MAX_TOKENS,
    };

    let analysis =
        generation::analyze_image(state.generator.as_ref(), "analyze_reference", &analysis_request)
            .await
            .map_err(|e| ApiError::generation("Failed to analyze reference image", e))?;

    Ok(Json(AnalyzeImageResponse {
        success: true,
        analysis,
    }))
}
