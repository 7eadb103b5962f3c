//! Finnish business ID (Y-tunnus) engine.
//!
//! Eight characters: a 7-digit base, a dash, and a weighted mod-11 check
//! digit. A weighted remainder of 1 has no valid check digit; such bases
//! are discarded during generation and rejected during validation.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, json};

use tunniste_core::{ConfigError, GeneratedArtifact, Result, Validation, random_digits};

const WEIGHTS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];
const RETRY_LIMIT: u32 = 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessIdOptions {}

pub fn generate_with(
    rng: &mut dyn RngCore,
    _options: &BusinessIdOptions,
) -> Result<GeneratedArtifact> {
    for _ in 0..RETRY_LIMIT {
        let base = random_digits(rng, 7)?;
        let Some(check) = check_digit(&base) else {
            // Remainder 1: no valid check digit exists for this base.
            continue;
        };
        let mut meta = Map::new();
        meta.insert("base".to_string(), json!(base));
        meta.insert("check_digit".to_string(), json!(check));
        return Ok(GeneratedArtifact::new(format!("{base}-{check}"), meta));
    }
    Err(ConfigError::RetryLimit("sampling business id base"))
}

pub fn generate(options: &BusinessIdOptions) -> Result<GeneratedArtifact> {
    generate_with(&mut rand::rng(), options)
}

/// Weighted mod-11 check digit over a 7-digit base, or `None` when the
/// remainder is 1.
pub fn check_digit(base: &str) -> Option<u32> {
    let sum: u32 = base
        .bytes()
        .zip(WEIGHTS)
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum();
    match sum % 11 {
        0 => Some(0),
        1 => None,
        remainder => Some(11 - remainder),
    }
}

/// Validate a business ID, tolerating punctuation around the digits.
pub fn validate(input: &str) -> Validation {
    if input.trim().is_empty() {
        return Validation::invalid("Missing value");
    }
    let normalized: String = input.chars().filter(char::is_ascii_digit).collect();
    if normalized.len() != 8 {
        return Validation::invalid("Malformed business ID");
    }
    let base = &normalized[..7];
    let given: u32 = normalized[7..].parse().unwrap_or(0);
    match check_digit(base) {
        Some(expected) if expected == given => {
            let mut meta = Map::new();
            meta.insert("base".to_string(), json!(base));
            meta.insert("check_digit".to_string(), json!(given));
            Validation::valid(format!("{base}-{given}"), meta)
        }
        _ => Validation::invalid("Checksum mismatch"),
    }
}
