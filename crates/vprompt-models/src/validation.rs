//! Request validation against the model constraint registry.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. creative-direction text (non-empty after trim, at most 5000 chars)
//! 2. aspect ratio
//! 3. model id and duration
//!
//! Nothing here performs I/O; handlers call these before any generation
//! request is dispatched.

use thiserror::Error;

use crate::constraint::{AspectRatio, VideoModel};

/// Maximum creative-direction length, in characters.
pub const MAX_CREATIVE_DIRECTION_CHARS: usize = 5000;

/// Reason a request was rejected before generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestRejection {
    #[error("Valid {field} is required and cannot be empty")]
    EmptyText { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TextTooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },

    #[error("Aspect ratio must be 16:9 or 9:16")]
    UnsupportedAspectRatio(String),

    #[error("Unsupported video model: {0}")]
    UnknownModel(String),

    #[error(
        "{} only supports {} second durations",
        .model.display_name(),
        .model.constraint().durations_phrase()
    )]
    UnsupportedDuration { model: VideoModel, duration: f64 },
}

/// Inbound generation parameters, borrowed from the request body.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub duration: f64,
    pub aspect_ratio: &'a str,
    pub creative_direction: Option<&'a str>,
}

/// Parameters that passed every check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest {
    pub model: VideoModel,
    pub duration_seconds: u32,
    pub aspect_ratio: AspectRatio,
}

/// Validate a free-text field: non-empty after trimming and, when `max_chars`
/// is set, no longer than that many characters.
pub fn validate_text(
    field: &'static str,
    text: &str,
    max_chars: Option<usize>,
) -> Result<(), RequestRejection> {
    if text.trim().is_empty() {
        return Err(RequestRejection::EmptyText { field });
    }

    if let Some(max) = max_chars {
        let length = text.chars().count();
        if length > max {
            return Err(RequestRejection::TextTooLong { field, length, max });
        }
    }

    Ok(())
}

/// Validate the creative direction of a concept request.
pub fn validate_creative_direction(text: &str) -> Result<(), RequestRejection> {
    validate_text(
        "creativeDirection",
        text,
        Some(MAX_CREATIVE_DIRECTION_CHARS),
    )
}

pub fn validate_aspect_ratio(value: &str) -> Result<AspectRatio, RequestRejection> {
    value
        .parse()
        .map_err(|_| RequestRejection::UnsupportedAspectRatio(value.to_string()))
}

/// Validate that `duration` is one of the model's discrete durations.
pub fn validate_duration(model: &str, duration: f64) -> Result<(VideoModel, u32), RequestRejection> {
    let model: VideoModel = model
        .parse()
        .map_err(|_| RequestRejection::UnknownModel(model.to_string()))?;

    if !model.constraint().allows_duration(duration) {
        return Err(RequestRejection::UnsupportedDuration { model, duration });
    }

    Ok((model, duration as u32))
}

/// Run every check in order.
pub fn validate_generation_request(
    request: &GenerationRequest<'_>,
) -> Result<ValidatedRequest, RequestRejection> {
    if let Some(text) = request.creative_direction {
        validate_creative_direction(text)?;
    }

    let aspect_ratio = validate_aspect_ratio(request.aspect_ratio)?;
    let (model, duration_seconds) = validate_duration(request.model, request.duration)?;

    if !model.constraint().allows_aspect_ratio(aspect_ratio) {
        return Err(RequestRejection::UnsupportedAspectRatio(
            request.aspect_ratio.to_string(),
        ));
    }

    Ok(ValidatedRequest {
        model,
        duration_seconds,
        aspect_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(model: &'a str, duration: f64, aspect_ratio: &'a str) -> GenerationRequest<'a> {
        GenerationRequest {
            model,
            duration,
            aspect_ratio,
            creative_direction: Some("A cozy coffee ad"),
        }
    }

    #[test]
    fn test_veo3_duration_rules() {
        assert!(matches!(
            validate_generation_request(&request("veo3", 5.0, "16:9")),
            Err(RequestRejection::UnsupportedDuration { model: VideoModel::Veo3, .. })
        ));
        let ok = validate_generation_request(&request("veo3", 6.0, "16:9")).unwrap();
        assert_eq!(ok.model, VideoModel::Veo3);
        assert_eq!(ok.duration_seconds, 6);
        assert_eq!(ok.aspect_ratio, AspectRatio::Landscape);
    }

    #[test]
    fn test_sora2_duration_rules() {
        assert!(validate_generation_request(&request("sora2", 6.0, "9:16")).is_err());
        let ok = validate_generation_request(&request("sora2", 8.0, "9:16")).unwrap();
        assert_eq!(ok.model, VideoModel::Sora2);
        assert_eq!(ok.duration_seconds, 8);
    }

    #[test]
    fn test_unknown_model_rejected() {
        assert_eq!(
            validate_generation_request(&request("runway", 6.0, "16:9")),
            Err(RequestRejection::UnknownModel("runway".to_string()))
        );
    }

    #[test]
    fn test_empty_creative_direction() {
        let mut req = request("veo3", 6.0, "16:9");
        req.creative_direction = Some("   \n\t");
        assert_eq!(
            validate_generation_request(&req),
            Err(RequestRejection::EmptyText { field: "creativeDirection" })
        );
    }

    #[test]
    fn test_creative_direction_length_limit() {
        let at_limit = "a".repeat(MAX_CREATIVE_DIRECTION_CHARS);
        assert!(validate_creative_direction(&at_limit).is_ok());

        let over = "a".repeat(MAX_CREATIVE_DIRECTION_CHARS + 1);
        assert!(matches!(
            validate_creative_direction(&over),
            Err(RequestRejection::TextTooLong { length: 5001, max: 5000, .. })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_CREATIVE_DIRECTION_CHARS);
        assert!(validate_creative_direction(&text).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // Bad text, bad ratio and bad duration: text is reported.
        let req = GenerationRequest {
            model: "veo3",
            duration: 5.0,
            aspect_ratio: "4:3",
            creative_direction: Some(""),
        };
        assert!(matches!(
            validate_generation_request(&req),
            Err(RequestRejection::EmptyText { .. })
        ));

        // Bad ratio and bad duration: ratio is reported.
        let req = GenerationRequest {
            creative_direction: None,
            ..req
        };
        assert!(matches!(
            validate_generation_request(&req),
            Err(RequestRejection::UnsupportedAspectRatio(_))
        ));
    }

    #[test]
    fn test_rejection_messages() {
        let err = validate_duration("veo3", 5.0).unwrap_err();
        assert_eq!(err.to_string(), "VEO 3 only supports 4, 6, or 8 second durations");

        let err = validate_duration("sora2", 6.0).unwrap_err();
        assert_eq!(err.to_string(), "Sora 2 only supports 4, 8, or 12 second durations");

        let err = validate_aspect_ratio("1:1").unwrap_err();
        assert_eq!(err.to_string(), "Aspect ratio must be 16:9 or 9:16");
    }
}
