//! Finnish IBAN engine.
//!
//! Generation covers the FI domestic layout only: a 4-digit bank code plus
//! 10 account digits, with ISO 7064 mod-97 check digits. Validation accepts
//! any structurally well-formed IBAN.

use rand::RngCore;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, json};
use std::sync::OnceLock;

use tunniste_core::{ConfigError, GeneratedArtifact, Result, Validation, random_digits};

const MOD97_CHUNK: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IbanFormat {
    #[default]
    Compact,
    Spaced,
}

impl std::str::FromStr for IbanFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "compact" => Ok(IbanFormat::Compact),
            "spaced" => Ok(IbanFormat::Spaced),
            other => Err(ConfigError::InvalidArgument(format!(
                "unknown iban format: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IbanOptions {
    pub country: String,
    /// Bank code; digits are kept, zero-padded to four. Random when absent.
    pub bank: Option<String>,
    pub format: IbanFormat,
}

impl Default for IbanOptions {
    fn default() -> Self {
        Self {
            country: "FI".to_string(),
            bank: None,
            format: IbanFormat::Compact,
        }
    }
}

pub fn generate_with(rng: &mut dyn RngCore, options: &IbanOptions) -> Result<GeneratedArtifact> {
    let country = options.country.to_uppercase();
    if country != "FI" {
        return Err(ConfigError::UnsupportedCountry(country));
    }
    let bank_code = match &options.bank {
        Some(bank) => {
            let digits: String = bank.chars().filter(|ch| ch.is_ascii_digit()).collect();
            let mut padded = format!("{digits:0>4}");
            padded.truncate(4);
            padded
        }
        None => random_digits(rng, 4)?,
    };
    let bban = format!("{bank_code}{}", random_digits(rng, 10)?);
    let check_digits = compute_check_digits(&country, &bban);
    let iban = format!("{country}{check_digits}{bban}");

    let mut meta = Map::new();
    meta.insert("country".to_string(), json!(country));
    meta.insert("bank_code".to_string(), json!(bank_code));
    meta.insert("bban".to_string(), json!(bban));
    meta.insert("check_digits".to_string(), json!(check_digits));
    Ok(GeneratedArtifact::new(format_iban(&iban, options.format), meta))
}

pub fn generate(options: &IbanOptions) -> Result<GeneratedArtifact> {
    generate_with(&mut rand::rng(), options)
}

/// Check digits are `98 - mod97(BBAN + country + "00")`, zero-padded.
fn compute_check_digits(country: &str, bban: &str) -> String {
    let rearranged = format!("{bban}{country}00");
    let remainder = mod97(&to_numeric(&rearranged));
    format!("{:02}", 98 - remainder)
}

/// Replace every letter with its ordinal value (`A=10 … Z=35`).
fn to_numeric(value: &str) -> String {
    let mut numeric = String::with_capacity(value.len() * 2);
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            numeric.push(ch);
        } else {
            let digit = ch.to_ascii_uppercase() as u32 - 'A' as u32 + 10;
            numeric.push_str(&digit.to_string());
        }
    }
    numeric
}

/// Reduce a decimal string modulo 97 in fixed-size chunks, carrying the
/// running remainder in front of each chunk.
fn mod97(numeric: &str) -> u32 {
    let mut remainder: u64 = 0;
    let bytes = numeric.as_bytes();
    for chunk in bytes.chunks(MOD97_CHUNK) {
        let mut window = remainder.to_string();
        window.push_str(std::str::from_utf8(chunk).unwrap_or_default());
        remainder = window.parse::<u64>().unwrap_or_default() % 97;
    }
    remainder as u32
}

pub fn format_iban(iban: &str, format: IbanFormat) -> String {
    let compact: String = iban.chars().filter(|ch| !ch.is_whitespace()).collect();
    match format {
        IbanFormat::Compact => compact,
        IbanFormat::Spaced => {
            let groups: Vec<String> = compact
                .as_bytes()
                .chunks(4)
                .map(|chunk| String::from_utf8_lossy(chunk).to_string())
                .collect();
            groups.join(" ")
        }
    }
}

fn shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[A-Z]{2}\d{2}[A-Z0-9]{1,30}$").expect("iban shape pattern"))
}

/// Validate an IBAN: normalize, check the ISO shape, and require the
/// rotated mod-97 reduction to be exactly 1.
pub fn validate(input: &str) -> Validation {
    if input.trim().is_empty() {
        return Validation::invalid("Missing value");
    }
    let normalized: String = input
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if !shape().is_match(&normalized) {
        return Validation::invalid("Malformed IBAN");
    }
    let rotated = format!("{}{}", &normalized[4..], &normalized[..4]);
    if mod97(&to_numeric(&rotated)) != 1 {
        return Validation::invalid("Checksum mismatch");
    }

    let mut meta = Map::new();
    meta.insert("country".to_string(), json!(&normalized[..2]));
    meta.insert("check_digits".to_string(), json!(&normalized[2..4]));
    Validation::valid(normalized, meta)
}
