//! Digit-sum reduction and the personal-day calculation.
//!
//! Any positive integer is folded into the range `1..=22` by repeatedly
//! summing its decimal digits. Numbers already inside the range are returned
//! unchanged, 22 included: the range end is a hard ceiling, not a master number.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Upper bound of the reduced range. Values at or below it are final.
pub const MAX_REDUCED: u32 = 22;

/// Valid day-of-month inputs.
pub const MIN_DAY: u32 = 1;
pub const MAX_DAY: u32 = 31;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Result of a personal-day calculation. All three values lie in `1..=22`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDayResult {
    pub personal_day: u32,
    pub birth_reduced: u32,
    pub current_reduced: u32,
}

/// Input errors. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumerologyError {
    #[error("'{0}' is not a day of the month, send a number from 1 to 31 or a date like 15.03.1990")]
    NotANumber(String),

    #[error("day {0} is out of range, send a number from 1 to 31")]
    DayOutOfRange(u32),
}

// ────────────────────────────────────────────────────────────────────────────
// Reduction
// ────────────────────────────────────────────────────────────────────────────

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Folds `n` into `1..=22`.
///
/// `reduce(n) == n` for every `n` in `1..=22`. Larger values are replaced by
/// their digit sum until they drop to 22 or below; for `u32` inputs this takes
/// at most three rounds. Zero is outside the contract and maps to zero.
pub fn reduce(n: u32) -> u32 {
    let mut value = n;
    while value > MAX_REDUCED {
        value = digit_sum(value);
    }
    value
}

/// Checks that `day` is a plausible day of the month.
pub fn validate_day(day: u32) -> Result<u32, NumerologyError> {
    if (MIN_DAY..=MAX_DAY).contains(&day) {
        Ok(day)
    } else {
        Err(NumerologyError::DayOutOfRange(day))
    }
}

/// Combines a birth day and the current day into a personal-day number.
///
/// Both inputs are validated before any reduction happens.
pub fn personal_day(birth_day: u32, current_day: u32) -> Result<PersonalDayResult, NumerologyError> {
    let birth_day = validate_day(birth_day)?;
    let current_day = validate_day(current_day)?;

    let birth_reduced = reduce(birth_day);
    let current_reduced = reduce(current_day);
    let result = PersonalDayResult {
        personal_day: reduce(birth_reduced + current_reduced),
        birth_reduced,
        current_reduced,
    };

    debug!(
        birth_day,
        current_day,
        birth_reduced = result.birth_reduced,
        current_reduced = result.current_reduced,
        personal_day = result.personal_day,
        "Computed personal day"
    );

    Ok(result)
}

/// Today's day of the month in local time.
pub fn today_day_of_month() -> u32 {
    Local::now().day()
}

// ────────────────────────────────────────────────────────────────────────────
// Input parsing
// ────────────────────────────────────────────────────────────────────────────

const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%Y-%m-%d", "%d/%m/%Y"];

/// Extracts a birth day from user input.
///
/// Accepts a bare day number ("15") or a full date ("15.03.1990",
/// "1990-03-15", "15/03/1990"). The day is validated against `1..=31`.
pub fn parse_birth_day(input: &str) -> Result<u32, NumerologyError> {
    let trimmed = input.trim();

    if let Ok(day) = trimmed.parse::<u32>() {
        return validate_day(day);
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(|date| date.day())
        .ok_or_else(|| NumerologyError::NotANumber(trimmed.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_is_identity_inside_range() {
        for n in 1..=22 {
            assert_eq!(reduce(n), n, "reduce({n}) should be a no-op");
        }
    }

    #[test]
    fn test_reduce_boundaries_are_not_folded() {
        assert_eq!(reduce(1), 1);
        assert_eq!(reduce(22), 22);
        assert_eq!(reduce(23), 5);
    }

    #[test]
    fn test_reduce_multi_round() {
        // 9999 -> 36 -> 9
        assert_eq!(reduce(9999), 9);
        // 799 -> 25 -> 7
        assert_eq!(reduce(799), 7);
        // u32::MAX = 4294967295 -> 57 -> 12
        assert_eq!(reduce(u32::MAX), 12);
    }

    #[test]
    fn test_reduce_range_and_idempotence() {
        for n in 1..=20_000 {
            let r = reduce(n);
            assert!((1..=22).contains(&r), "reduce({n}) = {r} left the range");
            assert_eq!(reduce(r), r, "reduce must be idempotent for {n}");
        }
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(15), 6);
        assert_eq!(digit_sum(1990), 19);
    }

    #[test]
    fn test_personal_day_15_20() {
        // Both days are already inside 1..=22, so only the sum is folded: 35 -> 8.
        let result = personal_day(15, 20).unwrap();
        assert_eq!(
            result,
            PersonalDayResult {
                personal_day: 8,
                birth_reduced: 15,
                current_reduced: 20,
            }
        );
    }

    #[test]
    fn test_personal_day_31_31() {
        let result = personal_day(31, 31).unwrap();
        assert_eq!(result.birth_reduced, 4);
        assert_eq!(result.current_reduced, 4);
        assert_eq!(result.personal_day, 8);
    }

    #[test]
    fn test_personal_day_sum_above_ceiling_is_reduced() {
        // 22 + 21 = 43 -> 7
        let result = personal_day(22, 21).unwrap();
        assert_eq!(result.birth_reduced, 22);
        assert_eq!(result.current_reduced, 21);
        assert_eq!(result.personal_day, 7);
    }

    #[test]
    fn test_personal_day_rejects_out_of_range_days() {
        assert_eq!(personal_day(0, 10), Err(NumerologyError::DayOutOfRange(0)));
        assert_eq!(personal_day(10, 32), Err(NumerologyError::DayOutOfRange(32)));
    }

    #[test]
    fn test_parse_birth_day_accepts_number_and_dates() {
        assert_eq!(parse_birth_day(" 15 "), Ok(15));
        assert_eq!(parse_birth_day("15.03.1990"), Ok(15));
        assert_eq!(parse_birth_day("1990-03-07"), Ok(7));
        assert_eq!(parse_birth_day("31/12/2000"), Ok(31));
    }

    #[test]
    fn test_parse_birth_day_rejects_bad_input() {
        assert_eq!(parse_birth_day("40"), Err(NumerologyError::DayOutOfRange(40)));
        assert!(matches!(parse_birth_day("tomorrow"), Err(NumerologyError::NotANumber(_))));
        assert!(matches!(parse_birth_day("31.02.1990"), Err(NumerologyError::NotANumber(_))));
    }

    #[test]
    fn test_today_is_a_valid_day() {
        assert!(validate_day(today_day_of_month()).is_ok());
    }
}
