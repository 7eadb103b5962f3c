use thiserror::Error;

/// Configuration faults raised by generators.
///
/// These cover malformed or contradictory caller input and are raised
/// synchronously. Malformed input to `validate` is never an error; it is
/// reported through [`crate::Validation`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The resolved character set has no characters left.
    #[error("character set must contain at least one character")]
    EmptyCharset,
    /// The template pattern is empty.
    #[error("template must be provided")]
    EmptyTemplate,
    /// A template pattern ends with an unescaped `\`.
    #[error("dangling escape in template")]
    DanglingEscape,
    /// A `{` in a template pattern has no matching `}`.
    #[error("unterminated custom set in template")]
    UnterminatedCharset,
    /// A named wordlist is not known.
    #[error("unknown wordlist: {0}")]
    UnknownWordlist(String),
    /// An argument is out of the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Generation for the requested country is not supported.
    #[error("unsupported country: {0}")]
    UnsupportedCountry(String),
    /// A bounded resampling loop ran out of attempts.
    #[error("retry limit exhausted while {0}")]
    RetryLimit(&'static str),
}

/// Convenience alias for results returned by Tunniste crates.
pub type Result<T> = std::result::Result<T, ConfigError>;
