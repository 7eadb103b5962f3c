use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tunniste_generate::business_id::{
    BusinessIdOptions, check_digit, generate_with, validate,
};

#[test]
fn generated_ids_validate_and_avoid_remainder_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(40);
    for _ in 0..100 {
        let artifact = generate_with(&mut rng, &BusinessIdOptions::default()).expect("generate");
        let result = validate(&artifact.value);
        assert!(result.valid, "generated id failed: {}", artifact.value);
        let base = artifact.meta["base"].as_str().expect("base in meta");
        assert!(check_digit(base).is_some(), "remainder-1 base leaked: {base}");
    }
}

#[test]
fn check_digit_matches_known_registrations() {
    // Published registry examples.
    assert_eq!(check_digit("0112038"), Some(9));
    assert_eq!(check_digit("0000000"), Some(0));
    assert_eq!(check_digit("1234567"), Some(1));
}

#[test]
fn known_ids_validate_with_normalization() {
    let result = validate(" 0112038-9 ");
    assert!(result.valid);
    assert_eq!(result.normalized.as_deref(), Some("0112038-9"));
    assert_eq!(result.meta["base"], "0112038");
    assert_eq!(result.meta["check_digit"], 9);
}

#[test]
fn checksum_mismatch_and_malformed_input_are_rejected() {
    let result = validate("1234567-2");
    assert!(!result.valid);
    assert_eq!(result.reason.as_deref(), Some("Checksum mismatch"));
    assert!(!validate("").valid);
    assert!(!validate("123456-7").valid);
    assert!(!validate("123456789").valid);
}
