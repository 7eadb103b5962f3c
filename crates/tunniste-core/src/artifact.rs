//! Artifact and validation result shapes shared by every engine.

use serde::Serialize;
use serde_json::{Map, Value};

/// A generated value plus the structured fields used to produce it.
///
/// `meta` is always derivable from `value`; artifacts never outlive the call
/// that created them.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArtifact {
    pub value: String,
    pub meta: Map<String, Value>,
}

impl GeneratedArtifact {
    pub fn new(value: impl Into<String>, meta: Map<String, Value>) -> Self {
        Self {
            value: value.into(),
            meta,
        }
    }
}

/// Outcome of validating caller input.
///
/// Validation never raises: malformed input is reported as
/// `{valid: false, reason}`, a pass as `{valid: true, normalized, meta}`.
#[derive(Debug, Clone, Serialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl Validation {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
            normalized: None,
            meta: Map::new(),
        }
    }

    pub fn valid(normalized: impl Into<String>, meta: Map<String, Value>) -> Self {
        Self {
            valid: true,
            reason: None,
            normalized: Some(normalized.into()),
            meta,
        }
    }
}
