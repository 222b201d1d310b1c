//! Storyboard concept models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One narrative beat within a concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    /// Short title taken from the bolded scene header
    pub title: String,

    /// Single-line description, whitespace collapsed
    pub description: String,
}

impl Scene {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One storyboard idea extracted from generated markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// 1-based position among the concepts of one parse call
    pub id: u32,

    /// Concept title, `"Concept {id}"` when the section has none
    pub title: String,

    /// Mood/tone line, may be empty
    pub mood: String,

    /// Scenes in order of appearance
    pub scenes: Vec<Scene>,

    /// Section source prefixed by a reconstructed heading
    pub raw_markdown: String,
}

impl Concept {
    /// Fallback title for a concept whose section has no title line.
    pub fn default_title(id: u32) -> String {
        format!("Concept {}", id)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_serializes_camel_case() {
        let concept = Concept {
            id: 1,
            title: "Sunrise".to_string(),
            mood: String::new(),
            scenes: vec![Scene::new("Open", "Wide shot.")],
            raw_markdown: "## Concept 1: Sunrise".to_string(),
        };

        let value = serde_json::to_value(&concept).unwrap();
        assert_eq!(value["rawMarkdown"], "## Concept 1: Sunrise");
        assert_eq!(value["scenes"][0]["title"], "Open");
        assert!(value.get("raw_markdown").is_none());
    }

    #[test]
    fn test_default_title() {
        assert_eq!(Concept::default_title(3), "Concept 3");
    }
}
