//! Generation services.

pub mod generation;
pub mod prompts;
pub mod system_prompts;

pub use system_prompts::{STORYBOARD_SYSTEM_PROMPT, VIDEO_SYSTEM_PROMPT};
