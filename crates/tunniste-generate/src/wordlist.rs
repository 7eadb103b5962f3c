//! Named wordlists for word-based passwords.

use std::sync::OnceLock;

use tunniste_core::{ConfigError, Result};

const EFF_SHORT: &str = include_str!("../assets/wordlists/eff_short.txt");

fn eff_short() -> &'static [&'static str] {
    static WORDS: OnceLock<Vec<&'static str>> = OnceLock::new();
    WORDS.get_or_init(|| {
        EFF_SHORT
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    })
}

/// Resolve a wordlist by name.
///
/// Only `eff` (the bundled diceware-style short list) is known; anything
/// else is [`ConfigError::UnknownWordlist`].
pub fn resolve_wordlist(name: &str) -> Result<&'static [&'static str]> {
    match name {
        "eff" => Ok(eff_short()),
        other => Err(ConfigError::UnknownWordlist(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eff_list_is_non_empty_and_lowercase() {
        let words = resolve_wordlist("eff").expect("bundled list");
        assert!(words.len() > 500);
        assert!(
            words
                .iter()
                .all(|word| word.chars().all(|ch| ch.is_ascii_lowercase()))
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!(
            resolve_wordlist("klingon"),
            Err(ConfigError::UnknownWordlist(_))
        ));
    }
}
