//! Parsing and validation of generated text.
//!
//! - [`concepts`]: storyboard markdown into [`vprompt_models::Concept`]s
//! - [`extract`]: fenced or bare JSON into a [`vprompt_models::VideoPrompt`]
//! - [`duration`]: shot durations against the declared total

pub mod concepts;
pub mod duration;
pub mod extract;

pub use concepts::parse_concepts;
pub use duration::{validate_durations, DurationReport, DURATION_TOLERANCE_SECS};
pub use extract::{extract_video_prompt, strip_code_fence, MalformedPromptError};
