//! Finnish personal identity code (HETU) engine.
//!
//! An 11-character code: `DDMMYY` + century sign + three-digit individual
//! number + mod-31 checksum over the ten digits that precede the sign.

use chrono::{Datelike, Local, Months, NaiveDate};
use rand::RngCore;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, json};
use std::sync::OnceLock;

use tunniste_core::{
    ConfigError, GeneratedArtifact, Result, Validation, random_date_between, random_int,
};

const CHECKSUM_TABLE: &[u8] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";
const RETRY_LIMIT: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Any,
    Female,
    Male,
}

impl Gender {
    fn accepts(self, individual: u64) -> bool {
        match self {
            Gender::Any => true,
            Gender::Female => individual % 2 == 0,
            Gender::Male => individual % 2 == 1,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "any" => Ok(Gender::Any),
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            other => Err(ConfigError::InvalidArgument(format!(
                "unknown gender: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HetuFormat {
    #[default]
    Short,
    Long,
}

impl std::str::FromStr for HetuFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "short" => Ok(HetuFormat::Short),
            "long" => Ok(HetuFormat::Long),
            other => Err(ConfigError::InvalidArgument(format!(
                "unknown hetu format: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HetuOptions {
    /// Explicit date of birth; sampled from `age_range` when absent.
    pub born: Option<NaiveDate>,
    /// Inclusive `[min_age, max_age]` in years, applied as calendar offsets
    /// from today.
    pub age_range: (u8, u8),
    pub gender: Gender,
    pub format: HetuFormat,
}

impl Default for HetuOptions {
    fn default() -> Self {
        Self {
            born: None,
            age_range: (18, 65),
            gender: Gender::Any,
            format: HetuFormat::Short,
        }
    }
}

pub fn generate_with(rng: &mut dyn RngCore, options: &HetuOptions) -> Result<GeneratedArtifact> {
    let date = match options.born {
        Some(date) => date,
        None => sample_date_of_birth(rng, options.age_range)?,
    };
    let individual = sample_individual_number(rng, options.gender)?;
    let date_part = format_date_part(date);
    let checksum = checksum_char(&date_part, individual);
    let sign = century_sign(date.year());
    let value = match options.format {
        HetuFormat::Short => format!("{date_part}{sign}{individual:03}{checksum}"),
        HetuFormat::Long => format!("{date_part}.{sign}{individual:03}-{checksum}"),
    };

    let mut meta = Map::new();
    meta.insert(
        "date_of_birth".to_string(),
        json!(date.format("%Y-%m-%d").to_string()),
    );
    meta.insert("gender".to_string(), json!(infer_gender(individual)));
    meta.insert(
        "individual_number".to_string(),
        json!(format!("{individual:03}")),
    );
    meta.insert("checksum".to_string(), json!(checksum.to_string()));
    meta.insert("century_sign".to_string(), json!(sign.to_string()));
    Ok(GeneratedArtifact::new(value, meta))
}

pub fn generate(options: &HetuOptions) -> Result<GeneratedArtifact> {
    generate_with(&mut rand::rng(), options)
}

fn sample_date_of_birth(rng: &mut dyn RngCore, (min_age, max_age): (u8, u8)) -> Result<NaiveDate> {
    if min_age > max_age {
        return Err(ConfigError::InvalidArgument(format!(
            "age range {min_age}-{max_age} is inverted"
        )));
    }
    let today = Local::now().date_naive();
    let newest = subtract_years(today, min_age)?;
    let oldest = subtract_years(today, max_age)?;
    random_date_between(rng, oldest, newest)
}

fn subtract_years(date: NaiveDate, years: u8) -> Result<NaiveDate> {
    date.checked_sub_months(Months::new(u32::from(years) * 12))
        .ok_or_else(|| ConfigError::InvalidArgument(format!("age {years} is out of range")))
}

/// Sample the three-digit individual number in `[002, 901]`, resampling
/// until its parity matches the gender constraint.
fn sample_individual_number(rng: &mut dyn RngCore, gender: Gender) -> Result<u64> {
    for _ in 0..RETRY_LIMIT {
        let individual = random_int(rng, 900)? + 2;
        if gender.accepts(individual) {
            return Ok(individual);
        }
    }
    Err(ConfigError::RetryLimit("sampling hetu individual number"))
}

fn format_date_part(date: NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.day(),
        date.month(),
        date.year().rem_euclid(100)
    )
}

fn checksum_char(date_part: &str, individual: u64) -> char {
    // The checksum reduces the concatenated DDMMYYNNN digits modulo 31.
    let base: u64 = format!("{date_part}{individual:03}")
        .parse()
        .unwrap_or_default();
    char::from(CHECKSUM_TABLE[(base % 31) as usize])
}

fn century_sign(year: i32) -> char {
    if year >= 2000 {
        'A'
    } else if year >= 1900 {
        '-'
    } else {
        '+'
    }
}

fn century_year(two_digit: u32, sign: char) -> i32 {
    let base = match sign {
        'A' => 2000,
        '-' => 1900,
        _ => 1800,
    };
    base + two_digit as i32
}

fn infer_gender(individual: u64) -> &'static str {
    if individual % 2 == 0 { "female" } else { "male" }
}

fn shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^(\d{6})([+\-A])(\d{3})([0-9A-Z])$").expect("hetu shape pattern")
    })
}

// Long-form input keeps its `-` checksum separator through the character
// filter, so it needs its own shape.
fn long_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^(\d{6})([+\-A])(\d{3})-([0-9A-Z])$").expect("hetu long shape pattern")
    })
}

/// Validate a personal identity code in short or long form.
pub fn validate(input: &str) -> Validation {
    if input.trim().is_empty() {
        return Validation::invalid("Missing value");
    }
    let normalized: String = input
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '+' || *ch == '-')
        .collect::<String>()
        .to_uppercase();
    let Some(captures) = shape()
        .captures(&normalized)
        .or_else(|| long_shape().captures(&normalized))
    else {
        return Validation::invalid("Malformed HETU");
    };
    let date_part = &captures[1];
    let sign = captures[2].chars().next().unwrap_or('-');
    let individual_part = &captures[3];
    let checksum = captures[4].chars().next().unwrap_or('0');

    let day: u32 = date_part[0..2].parse().unwrap_or(0);
    let month: u32 = date_part[2..4].parse().unwrap_or(0);
    let two_digit_year: u32 = date_part[4..6].parse().unwrap_or(0);
    let year = century_year(two_digit_year, sign);
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return Validation::invalid("Invalid date component");
    };

    let individual: u64 = individual_part.parse().unwrap_or(0);
    if checksum_char(date_part, individual) != checksum {
        return Validation::invalid("Checksum mismatch");
    }

    let mut meta = Map::new();
    meta.insert(
        "date_of_birth".to_string(),
        json!(date.format("%Y-%m-%d").to_string()),
    );
    meta.insert("gender".to_string(), json!(infer_gender(individual)));
    meta.insert("individual_number".to_string(), json!(individual_part));
    meta.insert("checksum".to_string(), json!(checksum.to_string()));
    meta.insert("century_sign".to_string(), json!(sign.to_string()));
    Validation::valid(
        format!("{date_part}{sign}{individual_part}{checksum}"),
        meta,
    )
}
