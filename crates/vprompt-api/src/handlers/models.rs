//! Model registry and prompt schema endpoints.

use axum::Json;
use schemars::schema::RootSchema;
use vprompt_models::{ModelConstraint, VideoPrompt, MODEL_CONSTRAINTS};

/// List supported video models with their durations and aspect ratios.
pub async fn list_models() -> Json<&'static [ModelConstraint]> {
    Json(&MODEL_CONSTRAINTS[..])
}

/// JSON schema of the generated video prompt.
pub async fn prompt_schema() -> Json<RootSchema> {
    Json(schemars::schema_for!(VideoPrompt))
}
