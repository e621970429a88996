// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day availability for booking dates.
//!
//! A date is unavailable when it is strictly before the current day or when
//! it matches a blocked date. Comparison is on naive local calendar days;
//! the caller supplies "today" so the check stays pure and testable.

use crate::error::DomainError;
use chrono::NaiveDate;

/// Returns whether a candidate date can be booked.
///
/// # Arguments
///
/// * `candidate` - The date to check
/// * `today` - The current day
/// * `blocked` - Dates the studio does not book
#[must_use]
pub fn is_date_available(candidate: NaiveDate, today: NaiveDate, blocked: &[NaiveDate]) -> bool {
    if candidate < today {
        return false;
    }
    !blocked.contains(&candidate)
}

/// Validates a candidate date, mapping each unavailability cause to its error.
///
/// # Errors
///
/// Returns `DomainError::DateInPast` when the candidate precedes today, or
/// `DomainError::DateUnavailable` when the candidate is blocked.
pub fn validate_date_available(
    candidate: NaiveDate,
    today: NaiveDate,
    blocked: &[NaiveDate],
) -> Result<(), DomainError> {
    if candidate < today {
        return Err(DomainError::DateInPast {
            date: candidate,
            today,
        });
    }
    if blocked.contains(&candidate) {
        return Err(DomainError::DateUnavailable { date: candidate });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_is_available() {
        let today = date(2026, 6, 15);
        assert!(is_date_available(today, today, &[]));
    }

    #[test]
    fn test_future_date_is_available() {
        let today = date(2026, 6, 15);
        assert!(is_date_available(date(2026, 7, 1), today, &[]));
    }

    #[test]
    fn test_past_date_is_unavailable() {
        let today = date(2026, 6, 15);
        assert!(!is_date_available(date(2026, 6, 14), today, &[]));
    }

    #[test]
    fn test_blocked_date_is_unavailable() {
        let today = date(2026, 6, 15);
        let blocked = vec![date(2026, 7, 4)];
        assert!(!is_date_available(date(2026, 7, 4), today, &blocked));
        assert!(is_date_available(date(2026, 7, 5), today, &blocked));
    }

    #[test]
    fn test_validate_reports_past_before_blocked() {
        let today = date(2026, 6, 15);
        let blocked = vec![date(2026, 6, 1)];
        // A date that is both past and blocked reports the past-day cause.
        let err = validate_date_available(date(2026, 6, 1), today, &blocked).unwrap_err();
        assert!(matches!(err, DomainError::DateInPast { .. }));
    }

    #[test]
    fn test_validate_reports_blocked() {
        let today = date(2026, 6, 15);
        let blocked = vec![date(2026, 8, 10)];
        let err = validate_date_available(date(2026, 8, 10), today, &blocked).unwrap_err();
        assert_eq!(
            err,
            DomainError::DateUnavailable {
                date: date(2026, 8, 10)
            }
        );
    }
}
