//! Concept parser tests against full storyboard documents.

use vprompt_parser::parse_concepts;

const THREE_CONCEPTS: &str = include_str!("fixtures/three_concepts.md");

#[test]
fn test_parse_three_concept_document() {
    let concepts = parse_concepts(THREE_CONCEPTS);
    assert_eq!(concepts.len(), 3);

    let titles: Vec<&str> = concepts.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Morning Ritual", "City Pace", "Origin Story"]);

    for (idx, concept) in concepts.iter().enumerate() {
        assert_eq!(concept.id, idx as u32 + 1);
        assert_eq!(concept.scenes.len(), 6, "concept {} scene count", concept.id);
        assert!(!concept.mood.is_empty());
        assert!(concept
            .raw_markdown
            .starts_with(&format!("## Concept {}: ", concept.id)));
    }
}

#[test]
fn test_parse_multi_line_scene_descriptions() {
    let concepts = parse_concepts(THREE_CONCEPTS);
    let first = &concepts[0];

    assert_eq!(
        first.mood,
        "Calm, warm, and intimate. Soft daylight and slow movement make the first cup feel like a small ceremony."
    );
    assert_eq!(first.scenes[0].title, "Dark Kitchen");
    assert_eq!(
        first.scenes[0].description,
        "A quiet kitchen sits in blue pre-dawn light with the grinder barely visible on the counter. \
         The camera drifts forward at counter height, building a hushed anticipation."
    );
    assert_eq!(first.scenes[5].title, "Brand Moment");
    assert!(first.scenes[5].description.ends_with("reveals the whole kitchen waking up."));

    let last = &concepts[2].scenes[5];
    assert_eq!(last.title, "Full Circle");
    assert!(last.description.ends_with("lands on the brand logo."));

    for scene in concepts.iter().flat_map(|c| c.scenes.iter()) {
        assert!(!scene.title.is_empty());
        assert!(!scene.description.contains('\n'));
        assert!(!scene.description.contains("  "));
    }
}

/// Build a document of `n` concepts with six scenes each, varying header
/// style, blank-line padding and trailing whitespace.
fn build_document(n: usize, blank_lines: usize, trailing: &str) -> String {
    let mut doc = String::from("# STORYBOARDS\n\n");
    let padding = format!("{}\n", trailing).repeat(blank_lines);

    for c in 1..=n {
        doc.push_str(&format!("## Concept {}: Idea {}{}\n", c, c, trailing));
        doc.push_str(&format!("**Mood/Tone:** Mood {}{}\n", c, trailing));
        doc.push_str(&padding);

        for s in 1..=6 {
            let header = if (c + s) % 2 == 0 {
                format!("{}. **Scene {}-{}:** Opening line{}\n", s, c, s, trailing)
            } else {
                format!("{}. **Scene {}-{}**: Opening line{}\n", s, c, s, trailing)
            };
            doc.push_str(&header);
            doc.push_str(&format!("  second   line {}{}\n", s, trailing));
            doc.push_str(&padding);
        }
    }

    doc
}

#[test]
fn test_generated_documents_keep_shape() {
    for n in 0..=4 {
        for blank_lines in 0..=2 {
            for trailing in ["", " ", "\t", "  \t "] {
                let doc = build_document(n, blank_lines, trailing);
                let concepts = parse_concepts(&doc);

                assert_eq!(concepts.len(), n, "n={} blank={} trailing={:?}", n, blank_lines, trailing);

                for (ci, concept) in concepts.iter().enumerate() {
                    let c = ci + 1;
                    assert_eq!(concept.id as usize, c);
                    assert_eq!(concept.title, format!("Idea {}", c));
                    assert_eq!(concept.mood, format!("Mood {}", c));
                    assert_eq!(concept.scenes.len(), 6);

                    for (si, scene) in concept.scenes.iter().enumerate() {
                        let s = si + 1;
                        assert_eq!(scene.title, format!("Scene {}-{}", c, s));
                        assert_eq!(scene.description, format!("Opening line second line {}", s));
                    }
                }
            }
        }
    }
}

#[test]
fn test_garbage_input_never_panics() {
    let inputs = [
        "## Concept",
        "## Concept 1",
        "## Concept 1:",
        "## Concept 99999999999999999999:",
        "1. **",
        "## Concept 1:\n1. **unterminated",
        "## Concept 1:\n1. ****: x",
        "## Concept 1:\n**Mood/Tone:**",
        "## Concept 1:\n1.**A**:\n2.**B**:\n",
        "## Concept 1: é ü 漢字\n1. **場面:** 説明",
    ];

    for input in inputs {
        let _ = parse_concepts(input);
    }

    let unicode = parse_concepts("## Concept 1: é ü 漢字\n1. **場面:** 説明");
    assert_eq!(unicode[0].title, "é ü 漢字");
    assert_eq!(unicode[0].scenes[0].title, "場面");
    assert_eq!(unicode[0].scenes[0].description, "説明");
}
