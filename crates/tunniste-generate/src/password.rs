//! Character- and word-based password generation plus an entropy estimate.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, json};

use tunniste_core::{Charset, CharsetOptions, GeneratedArtifact, Result, random_from_slice};

use crate::wordlist::resolve_wordlist;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterPasswordOptions {
    /// Password length; clamped to a minimum of 1.
    pub length: usize,
    pub preset: String,
    pub include: String,
    pub exclude: String,
}

impl Default for CharacterPasswordOptions {
    fn default() -> Self {
        Self {
            length: 20,
            preset: "ascii".to_string(),
            include: String::new(),
            exclude: String::new(),
        }
    }
}

/// Where the words of a passphrase come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordlistSource {
    /// A bundled list resolved by name.
    Named(String),
    /// A caller-supplied list.
    Inline(Vec<String>),
}

impl Default for WordlistSource {
    fn default() -> Self {
        Self::Named("eff".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordPasswordOptions {
    /// Word count; clamped to a minimum of 1.
    pub words: usize,
    pub wordlist: WordlistSource,
    pub separator: String,
}

impl Default for WordPasswordOptions {
    fn default() -> Self {
        Self {
            words: 6,
            wordlist: WordlistSource::default(),
            separator: "-".to_string(),
        }
    }
}

/// Draw `length` characters independently from the resolved charset.
///
/// Every draw goes through the rejection sampler; there is no raw-byte
/// modulo path.
pub fn character_password_with(
    rng: &mut dyn RngCore,
    options: &CharacterPasswordOptions,
) -> Result<GeneratedArtifact> {
    let length = options.length.max(1);
    let charset = Charset::build(&CharsetOptions {
        preset: options.preset.clone(),
        include: options.include.clone(),
        exclude: options.exclude.clone(),
    })?;
    let mut value = String::with_capacity(length);
    for _ in 0..length {
        value.push(charset.pick(rng)?);
    }

    let mut meta = Map::new();
    meta.insert("charset".to_string(), json!(charset.as_string()));
    meta.insert("charset_size".to_string(), json!(charset.len()));
    meta.insert(
        "entropy_bits".to_string(),
        json!(entropy_bits(&value, Some(charset.len()))),
    );
    Ok(GeneratedArtifact::new(value, meta))
}

pub fn character_password(options: &CharacterPasswordOptions) -> Result<GeneratedArtifact> {
    character_password_with(&mut rand::rng(), options)
}

/// Draw words with replacement from the resolved wordlist and join them.
pub fn word_password_with(
    rng: &mut dyn RngCore,
    options: &WordPasswordOptions,
) -> Result<GeneratedArtifact> {
    let count = options.words.max(1);
    let resolved: Vec<String> = match &options.wordlist {
        WordlistSource::Named(name) => resolve_wordlist(name)?
            .iter()
            .map(|word| word.to_string())
            .collect(),
        WordlistSource::Inline(words) => words.clone(),
    };
    let mut parts = Vec::with_capacity(count);
    for _ in 0..count {
        parts.push(random_from_slice(rng, &resolved)?.clone());
    }
    let value = parts.join(&options.separator);

    let mut meta = Map::new();
    meta.insert("words".to_string(), json!(count));
    meta.insert("wordlist_size".to_string(), json!(resolved.len()));
    meta.insert("separator".to_string(), json!(options.separator));
    meta.insert(
        "entropy_bits".to_string(),
        json!(round2(count as f64 * (resolved.len() as f64).log2())),
    );
    Ok(GeneratedArtifact::new(value, meta))
}

pub fn word_password(options: &WordPasswordOptions) -> Result<GeneratedArtifact> {
    word_password_with(&mut rand::rng(), options)
}

/// Estimate password strength as `length * log2(pool)` bits, rounded to two
/// decimals.
///
/// Without an explicit pool size the pool is estimated from the character
/// classes present (26 lower + 26 upper + 10 digits + 32 symbols), falling
/// back to the raw length when nothing matches.
pub fn entropy_bits(password: &str, pool_size: Option<usize>) -> f64 {
    let length = password.chars().count();
    if length == 0 {
        return 0.0;
    }
    let pool = pool_size.unwrap_or_else(|| estimate_pool(password));
    if pool == 0 {
        return 0.0;
    }
    round2(length as f64 * (pool as f64).log2())
}

fn estimate_pool(password: &str) -> usize {
    let mut pool = 0;
    if password.chars().any(|ch| ch.is_ascii_lowercase()) {
        pool += 26;
    }
    if password.chars().any(|ch| ch.is_ascii_uppercase()) {
        pool += 26;
    }
    if password.chars().any(|ch| ch.is_ascii_digit()) {
        pool += 10;
    }
    if password.chars().any(|ch| !ch.is_ascii_alphanumeric()) {
        pool += 32;
    }
    if pool == 0 {
        password.chars().count()
    } else {
        pool
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
