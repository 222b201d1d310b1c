//! Prompt-JSON extraction.
//!
//! Text models are told to answer with a bare JSON object but frequently
//! wrap it in a markdown code block anyway. The fence is stripped before
//! parsing so fenced and unfenced answers produce the same prompt.

use thiserror::Error;
use tracing::debug;
use vprompt_models::VideoPrompt;

const FENCE: &str = "```";

/// Generated text could not be turned into a [`VideoPrompt`].
#[derive(Debug, Error)]
pub enum MalformedPromptError {
    #[error("Generated prompt was empty")]
    Empty,

    #[error("Generated prompt is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Generated prompt does not match the prompt schema: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Remove a surrounding markdown code fence, with or without a language
/// tag. Unfenced text is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();

    let Some(body) = text.strip_prefix(FENCE) else {
        return text;
    };

    // Language tag (`json`, `JSON`, ...) directly after the opening fence
    let body = body.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let body = body.strip_suffix(FENCE).unwrap_or(body);

    body.trim()
}

/// Extract a [`VideoPrompt`] from a generation response.
pub fn extract_video_prompt(text: &str) -> Result<VideoPrompt, MalformedPromptError> {
    let json = strip_code_fence(text);
    if json.is_empty() {
        return Err(MalformedPromptError::Empty);
    }

    let value: serde_json::Value =
        serde_json::from_str(json).map_err(MalformedPromptError::InvalidJson)?;
    let prompt: VideoPrompt =
        serde_json::from_value(value).map_err(MalformedPromptError::Shape)?;

    debug!(
        shots = prompt.shots.len(),
        duration_total_seconds = prompt.duration_total_seconds,
        "Extracted video prompt"
    );

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT_JSON: &str = r#"{
  "project_title": "Morning Brew",
  "resolution": "16:9",
  "duration_total_seconds": 6,
  "visual_style": "Warm cinematic",
  "product_reference_image_link": null,
  "product_consistency_rule": null,
  "shared_elements": { "product": null, "lighting": "Golden hour", "color_palette": "Amber" },
  "shots": [
    { "shot_number": 1, "duration_seconds": 2, "scene_description": "Kitchen at dawn" },
    { "shot_number": 2, "duration_seconds": 2, "scene_description": "Pouring coffee" },
    { "shot_number": 3, "duration_seconds": 2, "scene_description": "First sip" }
  ]
}"#;

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```JSON {\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let plain = extract_video_prompt(PROMPT_JSON).unwrap();
        let fenced = extract_video_prompt(&format!("```json\n{}\n```", PROMPT_JSON)).unwrap();
        let bare_fence = extract_video_prompt(&format!("\n```\n{}\n```\n", PROMPT_JSON)).unwrap();

        assert_eq!(plain, fenced);
        assert_eq!(plain, bare_fence);
        assert_eq!(plain.project_title.as_deref(), Some("Morning Brew"));
        assert_eq!(plain.shots.len(), 3);
    }

    #[test]
    fn test_null_descriptive_fields_are_extracted() {
        let text = r#"```json
{
  "project_title": "Morning Brew",
  "visual_style": null,
  "duration_total_seconds": 4,
  "shots": [{ "shot_number": 1, "duration_seconds": 4, "lenses": null }]
}
```"#;
        let prompt = extract_video_prompt(text).unwrap();
        assert!(prompt.visual_style.is_none());
        assert!(prompt.shots[0].lenses.is_none());
        assert_eq!(prompt.duration_total_seconds, 4.0);
    }

    #[test]
    fn test_empty_text_is_malformed() {
        assert!(matches!(extract_video_prompt("   "), Err(MalformedPromptError::Empty)));
        assert!(matches!(
            extract_video_prompt("```json\n```"),
            Err(MalformedPromptError::Empty)
        ));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = extract_video_prompt("Here is your prompt: {").unwrap_err();
        assert!(matches!(err, MalformedPromptError::InvalidJson(_)));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let err = extract_video_prompt(r#"{"project_title": "No shots"}"#).unwrap_err();
        assert!(matches!(err, MalformedPromptError::Shape(_)));

        let err = extract_video_prompt("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, MalformedPromptError::Shape(_)));
    }
}
