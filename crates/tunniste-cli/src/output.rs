//! Rendering of artifacts and validation results.
//!
//! The renderer never alters `value`; JSON mode serializes the full
//! `{value, meta}` / validation shape, text mode prints the value alone.

use tunniste_core::{GeneratedArtifact, Validation};

pub fn render_artifact(artifact: &GeneratedArtifact, json: bool) -> String {
    if json {
        serde_json::to_string_pretty(artifact).unwrap_or_else(|_| artifact.value.clone())
    } else {
        artifact.value.clone()
    }
}

pub fn render_validation(validation: &Validation, json: bool) -> String {
    if json {
        serde_json::to_string_pretty(validation).unwrap_or_else(|_| String::new())
    } else if validation.valid {
        format!(
            "valid: {}",
            validation.normalized.as_deref().unwrap_or_default()
        )
    } else {
        format!(
            "invalid: {}",
            validation.reason.as_deref().unwrap_or_default()
        )
    }
}
