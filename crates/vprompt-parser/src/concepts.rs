//! Concept/scene parser for generated storyboard markdown.
//!
//! The input is whatever the text model returned for the "three concepts"
//! request. It is split on `## Concept <N>:` headings and each section is
//! walked line by line:
//!
//! ```text
//! ## Concept 1: Easel Unveiling Journey
//! **Mood/Tone:** Warm, inspiring, and aspirational.
//!
//! 1. **Canvas in Shadow:** The easel sits in soft darkness.
//! The camera slowly pushes in.
//!
//! 2. **First Light**: Golden sunlight streams through a window.
//! ```
//!
//! The scan never fails. Missing pieces fall back to defaults and a
//! document without any concept heading yields an empty list.

use tracing::debug;
use vprompt_models::{Concept, Scene};

const CONCEPT_MARKER: &str = "## Concept ";
const MOOD_LABEL: &str = "Mood/Tone";

/// Parse generated markdown into concepts, in source order.
///
/// Concepts are numbered 1..k by position; the numbers written in the
/// headings are ignored.
pub fn parse_concepts(markdown: &str) -> Vec<Concept> {
    let concepts: Vec<Concept> = split_sections(markdown)
        .into_iter()
        .enumerate()
        .map(|(idx, section)| build_concept(idx as u32 + 1, section))
        .collect();

    debug!(
        concepts = concepts.len(),
        scenes = concepts.iter().map(Concept::scene_count).sum::<usize>(),
        "Parsed storyboard concepts"
    );

    concepts
}

/// Sections following each `## Concept <digits>:` marker. Text before the
/// first marker is dropped.
fn split_sections(markdown: &str) -> Vec<&str> {
    let mut markers: Vec<(usize, usize)> = Vec::new();

    for (start, _) in markdown.match_indices(CONCEPT_MARKER) {
        let after = &markdown[start + CONCEPT_MARKER.len()..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after.as_bytes().get(digits) == Some(&b':') {
            markers.push((start, start + CONCEPT_MARKER.len() + digits + 1));
        }
    }

    markers
        .iter()
        .enumerate()
        .map(|(i, &(_, body_start))| {
            let body_end = markers
                .get(i + 1)
                .map(|&(next_start, _)| next_start)
                .unwrap_or(markdown.len());
            &markdown[body_start..body_end]
        })
        .collect()
}

fn build_concept(id: u32, section: &str) -> Concept {
    let title = section
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Concept::default_title(id));

    Concept {
        id,
        title,
        mood: extract_mood(section).unwrap_or_default(),
        scenes: parse_scenes(section),
        raw_markdown: format!("## Concept {}: {}", id, section),
    }
}

/// Text following the bold `Mood/Tone:` label. When the label ends its
/// line, the next non-blank line is used.
fn extract_mood(section: &str) -> Option<String> {
    let mut lines = section.lines();

    let rest = lines
        .by_ref()
        .find_map(|line| strip_bold_label(line, MOOD_LABEL))?
        .trim();

    if !rest.is_empty() {
        return Some(rest.to_string());
    }

    lines
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

/// Remainder of `line` after `**<label>:**` or `**<label>**:`, wherever the
/// label appears on the line.
fn strip_bold_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let inside = format!("**{}:**", label);
    let outside = format!("**{}**:", label);

    line.find(&inside)
        .map(|pos| &line[pos + inside.len()..])
        .or_else(|| line.find(&outside).map(|pos| &line[pos + outside.len()..]))
}

/// A matched scene header line.
#[derive(Debug, PartialEq)]
struct SceneHeader<'a> {
    title: &'a str,
    rest: &'a str,
}

/// Match `<digits>. **<title>**: <rest>` on a trimmed line.
///
/// The colon may also sit inside the bold run (`**<title>:**`), which is
/// how the storyboard prompt asks for it.
fn match_scene_header(line: &str) -> Option<SceneHeader<'_>> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let after_number = line[digits..].strip_prefix('.')?;
    let bold = after_number.trim_start().strip_prefix("**")?;

    let close = bold.find('*')?;
    let (inner, tail) = bold.split_at(close);
    let tail = tail.strip_prefix("**")?;

    let (title, rest) = match tail.strip_prefix(':') {
        Some(rest) => (inner, rest),
        None => (inner.trim_end().strip_suffix(':')?, tail),
    };

    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    Some(SceneHeader { title, rest })
}

/// A `##` heading ends a scene description without starting a new scene.
/// Single `#` lines (hashtags, "#1 rated") are ordinary continuation text.
fn is_section_boundary(line: &str) -> bool {
    line.starts_with("##")
}

/// Forward scan over the section's lines collecting scenes.
fn parse_scenes(section: &str) -> Vec<Scene> {
    let lines: Vec<&str> = section.lines().map(str::trim).collect();
    let mut scenes = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(header) = match_scene_header(lines[i]) else {
            i += 1;
            continue;
        };

        let mut description = String::from(header.rest);
        i += 1;

        while i < lines.len() {
            let line = lines[i];
            if match_scene_header(line).is_some() || is_section_boundary(line) {
                break;
            }
            if !line.is_empty() {
                description.push(' ');
                description.push_str(line);
            }
            i += 1;
        }

        scenes.push(Scene::new(header.title, collapse_whitespace(&description)));
    }

    scenes
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
