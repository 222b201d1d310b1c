//! Video generation models and their technical envelope.
//!
//! Each supported video model accepts a fixed set of clip durations and
//! aspect ratios. The table is defined once at compile time and never
//! mutated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported video generation models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoModel {
    /// Google VEO 3 / 3.1
    Veo3,
    /// OpenAI Sora 2
    Sora2,
}

impl VideoModel {
    /// All supported models, in registry order.
    pub const ALL: &'static [VideoModel] = &[VideoModel::Veo3, VideoModel::Sora2];

    /// Identifier used in requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoModel::Veo3 => "veo3",
            VideoModel::Sora2 => "sora2",
        }
    }

    /// Human-readable name used in messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            VideoModel::Veo3 => "VEO 3",
            VideoModel::Sora2 => "Sora 2",
        }
    }

    /// Technical constraints for this model.
    pub fn constraint(&self) -> &'static ModelConstraint {
        match self {
            VideoModel::Veo3 => &MODEL_CONSTRAINTS[0],
            VideoModel::Sora2 => &MODEL_CONSTRAINTS[1],
        }
    }
}

impl fmt::Display for VideoModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoModel {
    type Err = ModelParseError;

    /// Identifiers are matched exactly: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VideoModel::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ModelParseError(s.to_string()))
    }
}

#[derive(Debug, Error)]
#[error("Unknown video model: {0}")]
pub struct ModelParseError(pub String);

/// Output aspect ratios accepted by the video models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AspectRatio {
    /// 16:9 landscape
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16 portrait
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: &'static [AspectRatio] = &[AspectRatio::Landscape, AspectRatio::Portrait];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Landscape => "16:9",
            AspectRatio::Portrait => "9:16",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;

    /// Exact match only; "16/9" or " 16:9" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "16:9" => Ok(AspectRatio::Landscape),
            "9:16" => Ok(AspectRatio::Portrait),
            _ => Err(AspectRatioParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unsupported aspect ratio: {0}, expected 16:9 or 9:16")]
pub struct AspectRatioParseError(pub String);

/// Per-model technical envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConstraint {
    pub model_id: VideoModel,
    pub display_name: &'static str,
    pub allowed_durations: &'static [u32],
    pub allowed_aspect_ratios: &'static [AspectRatio],
}

impl ModelConstraint {
    /// Whether `seconds` is one of the discrete durations this model renders.
    ///
    /// Fractional values never match.
    pub fn allows_duration(&self, seconds: f64) -> bool {
        seconds.is_finite()
            && seconds.fract() == 0.0
            && self
                .allowed_durations
                .iter()
                .any(|&d| f64::from(d) == seconds)
    }

    pub fn allows_aspect_ratio(&self, ratio: AspectRatio) -> bool {
        self.allowed_aspect_ratios.contains(&ratio)
    }

    /// Durations formatted as "4, 6, or 8".
    pub fn durations_phrase(&self) -> String {
        let parts: Vec<String> = self
            .allowed_durations
            .iter()
            .map(|d| d.to_string())
            .collect();
        match parts.len() {
            0 => String::new(),
            1 => parts[0].clone(),
            2 => format!("{} or {}", parts[0], parts[1]),
            n => format!("{}, or {}", parts[..n - 1].join(", "), parts[n - 1]),
        }
    }
}

/// The registry, indexed in [`VideoModel::ALL`] order.
pub static MODEL_CONSTRAINTS: [ModelConstraint; 2] = [
    ModelConstraint {
        model_id: VideoModel::Veo3,
        display_name: "VEO 3",
        allowed_durations: &[4, 6, 8],
        allowed_aspect_ratios: AspectRatio::ALL,
    },
    ModelConstraint {
        model_id: VideoModel::Sora2,
        display_name: "Sora 2",
        allowed_durations: &[4, 8, 12],
        allowed_aspect_ratios: AspectRatio::ALL,
    },
];

/// Look up the constraint for a model identifier.
pub fn lookup_constraint(model_id: &str) -> Option<&'static ModelConstraint> {
    model_id.parse::<VideoModel>().ok().map(|m| m.constraint())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_enum() {
        for model in VideoModel::ALL {
            assert_eq!(model.constraint().model_id, *model);
            assert_eq!(model.constraint().display_name, model.display_name());
        }
    }

    #[test]
    fn test_veo3_durations() {
        let c = VideoModel::Veo3.constraint();
        assert!(c.allows_duration(4.0));
        assert!(c.allows_duration(6.0));
        assert!(c.allows_duration(8.0));
        assert!(!c.allows_duration(5.0));
        assert!(!c.allows_duration(12.0));
        assert!(!c.allows_duration(6.5));
    }

    #[test]
    fn test_sora2_durations() {
        let c = VideoModel::Sora2.constraint();
        assert!(c.allows_duration(8.0));
        assert!(c.allows_duration(12.0));
        assert!(!c.allows_duration(6.0));
        assert!(!c.allows_duration(f64::NAN));
    }

    #[test]
    fn test_model_parse() {
        assert_eq!("veo3".parse::<VideoModel>().unwrap(), VideoModel::Veo3);
        assert_eq!("sora2".parse::<VideoModel>().unwrap(), VideoModel::Sora2);
        assert!("runway".parse::<VideoModel>().is_err());
    }

    #[test]
    fn test_model_parse_is_exact() {
        assert!("SORA2".parse::<VideoModel>().is_err());
        assert!(" sora2 ".parse::<VideoModel>().is_err());
        assert!("Veo3".parse::<VideoModel>().is_err());
        assert!(lookup_constraint("kling").is_none());
    }

    #[test]
    fn test_aspect_ratio_exact_match() {
        assert_eq!("16:9".parse::<AspectRatio>().unwrap(), AspectRatio::Landscape);
        assert_eq!("9:16".parse::<AspectRatio>().unwrap(), AspectRatio::Portrait);
        assert!("1:1".parse::<AspectRatio>().is_err());
        assert!(" 16:9".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_aspect_ratio_serde() {
        let json = serde_json::to_string(&AspectRatio::Portrait).unwrap();
        assert_eq!(json, "\"9:16\"");
    }

    #[test]
    fn test_durations_phrase() {
        assert_eq!(VideoModel::Veo3.constraint().durations_phrase(), "4, 6, or 8");
        assert_eq!(VideoModel::Sora2.constraint().durations_phrase(), "4, 8, or 12");
    }
}
