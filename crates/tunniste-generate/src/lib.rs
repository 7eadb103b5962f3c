//! Generators and validators for Tunniste.
//!
//! Each engine exposes `generate_with(rng, &options)` against an injected
//! `RngCore` plus a `generate(&options)` wrapper bound to the thread-local
//! CSPRNG, and a `validate(&str)` that reports failures as values rather
//! than errors.

pub mod business_id;
pub mod hetu;
pub mod iban;
pub mod password;
pub mod template;
pub mod wordlist;

pub use business_id::BusinessIdOptions;
pub use hetu::{Gender, HetuFormat, HetuOptions};
pub use iban::{IbanFormat, IbanOptions};
pub use password::{CharacterPasswordOptions, WordPasswordOptions, entropy_bits};
pub use template::{CompiledTemplate, TemplateOptions, render_template};
pub use wordlist::resolve_wordlist;
