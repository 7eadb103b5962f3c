//! Unbiased sampling primitives over an injected entropy source.
//!
//! Every generator draws randomness through these functions with a
//! `&mut dyn RngCore`, so production code can bind the thread-local CSPRNG
//! (`rand::rng()`) while tests substitute a seeded `ChaCha8Rng`.

use chrono::{Days, NaiveDate};
use rand::RngCore;

use crate::error::{ConfigError, Result};

/// Draw a uniform integer in `[0, max_exclusive)` with no modulo bias.
///
/// Uses rejection sampling: draws from `next_u64` that fall into the biased
/// tail above the largest multiple of `max_exclusive` are discarded before
/// the modulo reduction.
pub fn random_int(rng: &mut dyn RngCore, max_exclusive: u64) -> Result<u64> {
    if max_exclusive == 0 {
        return Err(ConfigError::InvalidArgument(
            "max_exclusive must be a positive integer".to_string(),
        ));
    }
    let zone = (u64::MAX / max_exclusive) * max_exclusive;
    loop {
        let draw = rng.next_u64();
        if draw < zone {
            return Ok(draw % max_exclusive);
        }
    }
}

/// Concatenate `count` independent decimal digit draws.
pub fn random_digits(rng: &mut dyn RngCore, count: usize) -> Result<String> {
    let mut digits = String::with_capacity(count);
    for _ in 0..count {
        let digit = random_int(rng, 10)?;
        digits.push(char::from(b'0' + digit as u8));
    }
    Ok(digits)
}

/// Pick one element uniformly from a non-empty slice.
pub fn random_from_slice<'a, T>(rng: &mut dyn RngCore, values: &'a [T]) -> Result<&'a T> {
    if values.is_empty() {
        return Err(ConfigError::InvalidArgument(
            "slice must contain at least one element".to_string(),
        ));
    }
    let idx = random_int(rng, values.len() as u64)? as usize;
    Ok(&values[idx])
}

/// Pick a uniform date in `[start, end)`.
pub fn random_date_between(
    rng: &mut dyn RngCore,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<NaiveDate> {
    if end <= start {
        return Err(ConfigError::InvalidArgument(
            "end date must be after start date".to_string(),
        ));
    }
    let span = (end - start).num_days() as u64;
    let offset = random_int(rng, span)?;
    start
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| ConfigError::InvalidArgument("date offset out of range".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_int_stays_in_range_and_covers_all_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let value = random_int(&mut rng, 5).expect("positive bound");
            assert!(value < 5);
            seen[value as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn random_int_rejects_zero_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(matches!(
            random_int(&mut rng, 0),
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_digits_returns_requested_width() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let digits = random_digits(&mut rng, 12).expect("digits");
        assert_eq!(digits.len(), 12);
        assert!(digits.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn random_from_slice_rejects_empty_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let empty: [u8; 0] = [];
        assert!(matches!(
            random_from_slice(&mut rng, &empty),
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_date_between_requires_forward_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        assert!(matches!(
            random_date_between(&mut rng, day, day),
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_date_between_stays_inside_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        let start = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
        let end = NaiveDate::from_ymd_opt(2000, 2, 1).expect("valid date");
        for _ in 0..200 {
            let date = random_date_between(&mut rng, start, end).expect("range is forward");
            assert!(date >= start && date < end);
        }
    }
}
