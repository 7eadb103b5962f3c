//! Placeholder-grammar compiler and renderer.
//!
//! Patterns are scanned left to right: `\c` emits `c` verbatim, `{set}`
//! draws from a custom charset, `X` from the caller's default pool, `x`
//! from lowercase, `#` from digits, `*` from alphanumerics, and anything
//! else stands for itself. Compilation is pure; every render re-draws.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use tunniste_core::{Charset, CharsetOptions, ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateOptions {
    /// Pool backing `X` placeholders; preset name or literal alphabet.
    /// Falls back to `upper` when absent.
    pub pool: Option<String>,
}

#[derive(Debug, Clone)]
enum Token {
    Literal(char),
    Pool(Charset),
}

/// An ordered list of character-producing steps.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    tokens: Vec<Token>,
}

impl CompiledTemplate {
    pub fn compile(pattern: &str, options: &TemplateOptions) -> Result<Self> {
        if pattern.is_empty() {
            return Err(ConfigError::EmptyTemplate);
        }
        let default_pool = options.pool.as_deref().unwrap_or("upper");
        let default_charset = Charset::build(&CharsetOptions::preset(default_pool))?;
        let lower = Charset::build(&CharsetOptions::preset("lower"))?;
        let digits = Charset::build(&CharsetOptions::preset("digits"))?;
        let alnum = Charset::build(&CharsetOptions::preset("alnum"))?;

        let mut tokens = Vec::new();
        let mut chars = pattern.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\\' => {
                    let literal = chars.next().ok_or(ConfigError::DanglingEscape)?;
                    tokens.push(Token::Literal(literal));
                }
                '{' => {
                    let mut set = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(inner) => set.push(inner),
                            None => return Err(ConfigError::UnterminatedCharset),
                        }
                    }
                    tokens.push(Token::Pool(Charset::build(&CharsetOptions::preset(&set))?));
                }
                'X' => tokens.push(Token::Pool(default_charset.clone())),
                'x' => tokens.push(Token::Pool(lower.clone())),
                '#' => tokens.push(Token::Pool(digits.clone())),
                '*' => tokens.push(Token::Pool(alnum.clone())),
                other => tokens.push(Token::Literal(other)),
            }
        }
        Ok(Self { tokens })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Evaluate every token once, in order. Pool tokens draw fresh
    /// randomness on each call.
    pub fn render(&self, rng: &mut dyn RngCore) -> Result<String> {
        let mut out = String::with_capacity(self.tokens.len());
        for token in &self.tokens {
            match token {
                Token::Literal(ch) => out.push(*ch),
                Token::Pool(charset) => out.push(charset.pick(rng)?),
            }
        }
        Ok(out)
    }
}

/// Compile and render a pattern against the injected entropy source.
pub fn render_template_with(
    rng: &mut dyn RngCore,
    pattern: &str,
    options: &TemplateOptions,
) -> Result<String> {
    CompiledTemplate::compile(pattern, options)?.render(rng)
}

/// Compile and render a pattern against the thread-local CSPRNG.
pub fn render_template(pattern: &str, options: &TemplateOptions) -> Result<String> {
    render_template_with(&mut rand::rng(), pattern, options)
}
