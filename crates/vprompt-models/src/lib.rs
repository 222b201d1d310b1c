//! Shared data models for VPrompt.
//!
//! This crate provides Serde-serializable types for:
//! - Storyboard concepts and scenes
//! - Structured video prompts and shots
//! - Video model constraints (durations, aspect ratios)
//! - Image media types
//! - Request validation against the constraint registry

pub mod concept;
pub mod constraint;
pub mod media;
pub mod prompt;
pub mod validation;

// Re-export common types
pub use concept::{Concept, Scene};
pub use constraint::{
    lookup_constraint, AspectRatio, ModelConstraint, VideoModel, MODEL_CONSTRAINTS,
};
pub use media::{ImageMediaType, MediaTypeError};
pub use prompt::{SharedElements, Shot, ShotCount, VideoPrompt};
pub use validation::{
    validate_aspect_ratio, validate_creative_direction, validate_duration,
    validate_generation_request, validate_text, GenerationRequest, RequestRejection,
    ValidatedRequest, MAX_CREATIVE_DIRECTION_CHARS,
};
