//! Final video prompt models.
//!
//! A [`VideoPrompt`] is the JSON document a text model produces for a video
//! generation model. Only `duration_total_seconds`, `shots` and each shot's
//! number and duration are required to deserialize. Descriptive fields are
//! optional and tolerate `null`; absent fields stay absent on output and
//! unknown fields pass through, so the document round-trips unchanged.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Elements shared by every shot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SharedElements {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<String>,

    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: Map<String, Value>,
}

/// One camera take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Shot {
    pub shot_number: u32,
    pub duration_seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_angle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lenses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub dialogue_block: Option<String>,

    /// Shot-level fields outside the schema
    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: Map<String, Value>,
}

impl Shot {
    /// Bare shot with only the required fields set.
    pub fn new(shot_number: u32, duration_seconds: f64) -> Self {
        Self {
            shot_number,
            duration_seconds,
            scene_description: None,
            action: None,
            camera_angle: None,
            movement: None,
            lenses: None,
            lighting: None,
            audio: None,
            dialogue_block: None,
            extra: Map::new(),
        }
    }
}

/// Complete structured prompt for a video generation model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoPrompt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,

    /// "16:9" or "9:16" as emitted by the model; not coerced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    pub duration_total_seconds: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_style: Option<String>,

    #[serde(default)]
    pub product_reference_image_link: Option<String>,

    #[serde(default)]
    pub product_consistency_rule: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_elements: Option<SharedElements>,

    pub shots: Vec<Shot>,

    /// Fields outside the schema, passed through untouched
    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: Map<String, Value>,
}

impl VideoPrompt {
    /// Sum of per-shot durations, in shot order.
    pub fn shots_duration_sum(&self) -> f64 {
        self.shots.iter().map(|s| s.duration_seconds).sum()
    }

    /// Whether shot numbers run 1, 2, ..., n.
    pub fn has_sequential_shot_numbers(&self) -> bool {
        self.shots
            .iter()
            .enumerate()
            .all(|(i, s)| s.shot_number as usize == i + 1)
    }
}

/// Shot count requested for a prompt: `"auto"`, a number, or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShotCount {
    Count(u32),
    Text(String),
}

impl ShotCount {
    pub fn is_auto(&self) -> bool {
        matches!(self, ShotCount::Text(s) if s.trim().eq_ignore_ascii_case("auto"))
    }

    /// Rendering used in the generation request.
    pub fn describe(&self) -> String {
        match self {
            _ if self.is_auto() => "Auto (determine optimal)".to_string(),
            ShotCount::Count(n) => n.to_string(),
            ShotCount::Text(s) => s.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> Value {
        serde_json::json!({
            "project_title": "Easel",
            "resolution": "16:9",
            "duration_total_seconds": 6.0,
            "visual_style": "warm",
            "product_reference_image_link": null,
            "product_consistency_rule": null,
            "shared_elements": { "product": null, "lighting": "golden", "color_palette": "amber" },
            "shots": [
                { "shot_number": 1, "duration_seconds": 2.5, "scene_description": "a", "action": "b",
                  "camera_angle": "wide", "movement": "static", "lenses": "35mm", "lighting": "soft",
                  "audio": null, "dialogue_block": null },
                { "shot_number": 2, "duration_seconds": 3.5, "scene_description": "c", "action": "d",
                  "camera_angle": "close", "movement": "dolly-in", "lenses": "85mm", "lighting": "soft",
                  "audio": "ambient", "dialogue_block": null }
            ],
            "notes": "kept"
        })
    }

    #[test]
    fn test_deserialize_full_prompt() {
        let prompt: VideoPrompt = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(prompt.project_title.as_deref(), Some("Easel"));
        assert_eq!(prompt.shots.len(), 2);
        let shared = prompt.shared_elements.as_ref().unwrap();
        assert_eq!(shared.lighting.as_deref(), Some("golden"));
        assert_eq!(prompt.extra.get("notes").and_then(Value::as_str), Some("kept"));
        assert!((prompt.shots_duration_sum() - 6.0).abs() < f64::EPSILON);
        assert!(prompt.has_sequential_shot_numbers());
    }

    #[test]
    fn test_full_prompt_round_trips_unchanged() {
        let prompt: VideoPrompt = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(serde_json::to_value(&prompt).unwrap(), sample_json());
    }

    #[test]
    fn test_shot_round_trip_keeps_unknown_and_omits_absent() {
        let input = serde_json::json!({
            "duration_total_seconds": 4,
            "shots": [{ "shot_number": 1, "duration_seconds": 4.0, "transition": "cut" }]
        });
        let prompt: VideoPrompt = serde_json::from_value(input).unwrap();
        assert_eq!(prompt.shots[0].extra["transition"], "cut");

        let back = serde_json::to_value(&prompt).unwrap();
        assert_eq!(
            back["shots"][0],
            serde_json::json!({
                "shot_number": 1,
                "duration_seconds": 4.0,
                "audio": null,
                "dialogue_block": null,
                "transition": "cut"
            })
        );
        assert!(back.get("project_title").is_none());
        assert!(back.get("shared_elements").is_none());
    }

    #[test]
    fn test_null_text_fields_are_accepted() {
        let prompt: VideoPrompt = serde_json::from_value(serde_json::json!({
            "project_title": null,
            "visual_style": null,
            "resolution": "9:16",
            "duration_total_seconds": 4,
            "shared_elements": null,
            "shots": [{ "shot_number": 1, "duration_seconds": 4, "lenses": null, "action": null }]
        }))
        .unwrap();
        assert!(prompt.visual_style.is_none());
        assert!(prompt.shared_elements.is_none());
        assert!(prompt.shots[0].lenses.is_none());
        assert_eq!(prompt.resolution.as_deref(), Some("9:16"));
    }

    #[test]
    fn test_sparse_prompt_uses_defaults() {
        let prompt: VideoPrompt = serde_json::from_value(serde_json::json!({
            "duration_total_seconds": 4,
            "shots": [{ "shot_number": 1, "duration_seconds": 4 }]
        }))
        .unwrap();
        assert!(prompt.project_title.is_none());
        assert!(prompt.shared_elements.is_none());
        assert!(prompt.shots[0].audio.is_none());
        assert_eq!(prompt.shots[0], Shot::new(1, 4.0));
    }

    #[test]
    fn test_missing_shots_is_an_error() {
        let result: Result<VideoPrompt, _> =
            serde_json::from_value(serde_json::json!({ "duration_total_seconds": 4 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_sequential_shot_numbers() {
        let mut prompt: VideoPrompt = serde_json::from_value(sample_json()).unwrap();
        prompt.shots[1].shot_number = 3;
        assert!(!prompt.has_sequential_shot_numbers());
    }

    #[test]
    fn test_shot_count_describe() {
        let auto: ShotCount = serde_json::from_str("\"auto\"").unwrap();
        assert!(auto.is_auto());
        assert_eq!(auto.describe(), "Auto (determine optimal)");

        let count: ShotCount = serde_json::from_str("3").unwrap();
        assert_eq!(count, ShotCount::Count(3));
        assert_eq!(count.describe(), "3");

        let text: ShotCount = serde_json::from_str("\" 2 shots \"").unwrap();
        assert_eq!(text.describe(), "2 shots");
    }
}
