use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tunniste_core::ConfigError;
use tunniste_generate::hetu::{Gender, HetuFormat, HetuOptions, generate_with, validate};

#[test]
fn generated_codes_validate_and_respect_gender() {
    let mut rng = ChaCha8Rng::seed_from_u64(20);
    for gender in [Gender::Female, Gender::Male, Gender::Any] {
        let options = HetuOptions {
            gender,
            ..HetuOptions::default()
        };
        for _ in 0..20 {
            let artifact = generate_with(&mut rng, &options).expect("generate");
            assert_eq!(artifact.value.chars().count(), 11);
            let result = validate(&artifact.value);
            assert!(result.valid, "generated hetu failed: {}", artifact.value);
            if gender != Gender::Any {
                let expected = match gender {
                    Gender::Female => "female",
                    _ => "male",
                };
                assert_eq!(result.meta["gender"], expected);
            }
        }
    }
}

#[test]
fn explicit_birth_date_is_encoded() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let options = HetuOptions {
        born: NaiveDate::from_ymd_opt(1990, 1, 1),
        ..HetuOptions::default()
    };
    let artifact = generate_with(&mut rng, &options).expect("generate");
    assert!(artifact.value.starts_with("010190-"));
    let result = validate(&artifact.value);
    assert!(result.valid);
    assert_eq!(result.meta["date_of_birth"], "1990-01-01");
}

#[test]
fn long_format_inserts_separators_and_still_validates() {
    let mut rng = ChaCha8Rng::seed_from_u64(22);
    let options = HetuOptions {
        format: HetuFormat::Long,
        ..HetuOptions::default()
    };
    let artifact = generate_with(&mut rng, &options).expect("generate");
    assert_eq!(artifact.value.chars().count(), 13);
    assert_eq!(artifact.value.chars().nth(6), Some('.'));
    let result = validate(&artifact.value);
    assert!(result.valid);
    // Normalization strips the long-form punctuation.
    assert_eq!(
        result.normalized.as_deref().map(str::len),
        Some(11),
        "normalized form should be the 11-char short form"
    );
}

#[test]
fn century_signs_follow_the_birth_year() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    for (year, sign) in [(2004, 'A'), (1977, '-'), (1899, '+')] {
        let options = HetuOptions {
            born: NaiveDate::from_ymd_opt(year, 6, 15),
            ..HetuOptions::default()
        };
        let artifact = generate_with(&mut rng, &options).expect("generate");
        assert_eq!(artifact.value.chars().nth(6), Some(sign));
        assert!(validate(&artifact.value).valid);
    }
}

#[test]
fn known_code_validates_with_derived_fields() {
    let result = validate("010190-953D");
    assert!(result.valid);
    assert_eq!(result.normalized.as_deref(), Some("010190-953D"));
    assert_eq!(result.meta["date_of_birth"], "1990-01-01");
    assert_eq!(result.meta["gender"], "male");
    assert_eq!(result.meta["century_sign"], "-");
}

#[test]
fn long_form_input_normalizes_to_the_short_form() {
    let result = validate("010190.-953-D");
    assert!(result.valid);
    assert_eq!(result.normalized.as_deref(), Some("010190-953D"));
    // A stray checksum separator without the rest of the long shape is
    // still malformed.
    assert!(!validate("010190-95-3D").valid);
}

#[test]
fn malformed_and_inconsistent_codes_are_rejected() {
    assert!(!validate("010101-123X").valid);
    assert!(!validate("").valid);
    assert!(!validate("not a hetu").valid);
    // Day 31 in a 30-day month.
    let result = validate("310690-953D");
    assert!(!result.valid);
    assert_eq!(result.reason.as_deref(), Some("Invalid date component"));
    // Valid shape and date, wrong checksum.
    let result = validate("010190-953E");
    assert!(!result.valid);
    assert_eq!(result.reason.as_deref(), Some("Checksum mismatch"));
}

#[test]
fn inverted_age_range_is_a_configuration_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(24);
    let options = HetuOptions {
        age_range: (65, 18),
        ..HetuOptions::default()
    };
    assert!(matches!(
        generate_with(&mut rng, &options),
        Err(ConfigError::InvalidArgument(_))
    ));
}
