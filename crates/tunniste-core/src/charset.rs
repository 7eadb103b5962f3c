//! Charset presets and the include/exclude builder.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::sampler::random_int;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const ALNUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const ASCII: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
// Drops look-alikes: 0/O, 1/l/I, and friends.
const SAFE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";
const HEX: &str = "0123456789abcdef";

/// Resolve a named preset, or `None` when the name should be treated as a
/// literal alphabet.
pub fn preset_alphabet(name: &str) -> Option<&'static str> {
    match name {
        "lower" => Some(LOWER),
        "upper" => Some(UPPER),
        "digits" => Some(DIGITS),
        "alnum" => Some(ALNUM),
        "ascii" => Some(ASCII),
        "safe" => Some(SAFE),
        "hex" => Some(HEX),
        _ => None,
    }
}

/// Inputs to [`Charset::build`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharsetOptions {
    /// Preset name, or a literal alphabet when unrecognized.
    pub preset: String,
    /// Characters appended to the preset.
    pub include: String,
    /// Characters removed after the union.
    pub exclude: String,
}

impl Default for CharsetOptions {
    fn default() -> Self {
        Self {
            preset: "ascii".to_string(),
            include: String::new(),
            exclude: String::new(),
        }
    }
}

impl CharsetOptions {
    pub fn preset(name: &str) -> Self {
        Self {
            preset: name.to_string(),
            ..Self::default()
        }
    }
}

/// An ordered, deduplicated sampling alphabet. Non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Build from a preset plus include/exclude overrides.
    ///
    /// Order is insertion order of the union (preset first, then include);
    /// duplicates collapse once. Fails with [`ConfigError::EmptyCharset`]
    /// when nothing survives the exclusions.
    pub fn build(options: &CharsetOptions) -> Result<Self> {
        let base = preset_alphabet(&options.preset).unwrap_or(options.preset.as_str());
        let mut chars: Vec<char> = Vec::new();
        for ch in base.chars().chain(options.include.chars()) {
            if !chars.contains(&ch) {
                chars.push(ch);
            }
        }
        chars.retain(|ch| !options.exclude.contains(*ch));
        if chars.is_empty() {
            return Err(ConfigError::EmptyCharset);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Draw one character uniformly, through the rejection sampler.
    pub fn pick(&self, rng: &mut dyn RngCore) -> Result<char> {
        let idx = random_int(rng, self.chars.len() as u64)? as usize;
        Ok(self.chars[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_collapses_duplicates_in_insertion_order() {
        let options = CharsetOptions {
            preset: "abcabc".to_string(),
            include: "cba!".to_string(),
            exclude: String::new(),
        };
        let charset = Charset::build(&options).expect("non-empty");
        assert_eq!(charset.as_string(), "abc!");
    }

    #[test]
    fn build_applies_exclusions() {
        let options = CharsetOptions {
            preset: "hex".to_string(),
            include: String::new(),
            exclude: "abcdef".to_string(),
        };
        let charset = Charset::build(&options).expect("non-empty");
        assert_eq!(charset.as_string(), "0123456789");
    }

    #[test]
    fn build_rejects_empty_result() {
        let options = CharsetOptions {
            preset: "ab".to_string(),
            include: String::new(),
            exclude: "ab".to_string(),
        };
        assert!(matches!(
            Charset::build(&options),
            Err(ConfigError::EmptyCharset)
        ));
    }

    #[test]
    fn unknown_preset_is_a_literal_alphabet() {
        let charset = Charset::build(&CharsetOptions::preset("XYZ")).expect("non-empty");
        assert_eq!(charset.as_string(), "XYZ");
    }
}
