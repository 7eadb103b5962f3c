//! Core contracts for Tunniste.
//!
//! This crate defines the configuration error kinds, the unbiased entropy
//! sampler, the charset builder, and the artifact/validation data model
//! shared by every generator.

pub mod artifact;
pub mod charset;
pub mod error;
pub mod sampler;

pub use artifact::{GeneratedArtifact, Validation};
pub use charset::{Charset, CharsetOptions};
pub use error::{ConfigError, Result};
pub use sampler::{random_date_between, random_digits, random_from_slice, random_int};
