use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tunniste_core::ConfigError;
use tunniste_generate::iban::{IbanFormat, IbanOptions, format_iban, generate_with, validate};

#[test]
fn generated_ibans_validate() {
    let mut rng = ChaCha8Rng::seed_from_u64(30);
    for _ in 0..50 {
        let artifact = generate_with(&mut rng, &IbanOptions::default()).expect("generate");
        assert_eq!(artifact.value.len(), 18);
        assert!(artifact.value.starts_with("FI"));
        let result = validate(&artifact.value);
        assert!(result.valid, "generated iban failed: {}", artifact.value);
    }
}

#[test]
fn caller_supplied_bank_code_is_normalized() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let options = IbanOptions {
        bank: Some("12-3".to_string()),
        ..IbanOptions::default()
    };
    let artifact = generate_with(&mut rng, &options).expect("generate");
    assert_eq!(artifact.meta["bank_code"], "0123");
    assert_eq!(&artifact.value[4..8], "0123");
    assert!(validate(&artifact.value).valid);
}

#[test]
fn spaced_format_groups_by_four() {
    let mut rng = ChaCha8Rng::seed_from_u64(32);
    let options = IbanOptions {
        format: IbanFormat::Spaced,
        ..IbanOptions::default()
    };
    let artifact = generate_with(&mut rng, &options).expect("generate");
    let groups: Vec<&str> = artifact.value.split(' ').collect();
    assert_eq!(groups.len(), 5);
    assert!(groups[..4].iter().all(|group| group.len() == 4));
    assert_eq!(groups[4].len(), 2);
    // Validation tolerates the spacing.
    assert!(validate(&artifact.value).valid);
}

#[test]
fn format_round_trips_between_compact_and_spaced() {
    let spaced = format_iban("FI2112345600000785", IbanFormat::Spaced);
    assert_eq!(spaced, "FI21 1234 5600 0007 85");
    assert_eq!(format_iban(&spaced, IbanFormat::Compact), "FI2112345600000785");
}

#[test]
fn known_iban_validates() {
    let result = validate("fi21 1234 5600 0007 85");
    assert!(result.valid);
    assert_eq!(result.normalized.as_deref(), Some("FI2112345600000785"));
    assert_eq!(result.meta["country"], "FI");
    assert_eq!(result.meta["check_digits"], "21");
}

#[test]
fn bad_checksum_and_malformed_input_are_rejected() {
    let result = validate("FI0012345600000000");
    assert!(!result.valid);
    assert_eq!(result.reason.as_deref(), Some("Checksum mismatch"));
    assert!(!validate("").valid);
    assert!(!validate("F12112345600000785").valid);
    assert!(!validate("FI21").valid);
}

#[test]
fn non_finnish_generation_is_unsupported() {
    let mut rng = ChaCha8Rng::seed_from_u64(33);
    let options = IbanOptions {
        country: "SE".to_string(),
        ..IbanOptions::default()
    };
    assert!(matches!(
        generate_with(&mut rng, &options),
        Err(ConfigError::UnsupportedCountry(_))
    ));
}
