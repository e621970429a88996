// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Confirmation number generation.
//!
//! Numbers have the shape `KS-<base36 millis>-<5-char suffix>`: the middle
//! segment encodes the completion timestamp, the suffix is a random draw.
//! They are display identifiers, not authoritative records: two completions
//! in the same millisecond with the same draw are not guaranteed distinct,
//! and nothing checks them against a backend.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// The fixed prefix on every confirmation number.
const PREFIX: &str = "KS";

/// Length of the random suffix segment.
const SUFFIX_LEN: usize = 5;

/// Alphabet for the random suffix (uppercase base36).
const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A generated booking confirmation number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmationNumber {
    /// The full formatted value (e.g. "KS-LX2C91AB-7QK3M").
    value: String,
}

impl ConfirmationNumber {
    /// Generates a fresh confirmation number for a completion timestamp.
    ///
    /// # Arguments
    ///
    /// * `timestamp_millis` - Milliseconds since the Unix epoch at completion
    #[must_use]
    pub fn generate(timestamp_millis: i64) -> Self {
        let encoded: String = to_base36(timestamp_millis).to_uppercase();
        let suffix: String = random_suffix();
        Self {
            value: format!("{PREFIX}-{encoded}-{suffix}"),
        }
    }

    /// Parses a confirmation number, checking its shape.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidConfirmationNumber` when the value does
    /// not match `KS-<base36>-<5 uppercase alphanumerics>`.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let mut parts = value.split('-');
        let (Some(prefix), Some(encoded), Some(suffix), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DomainError::InvalidConfirmationNumber(value.to_string()));
        };

        let prefix_ok: bool = prefix == PREFIX;
        let encoded_ok: bool = !encoded.is_empty()
            && encoded
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        let suffix_ok: bool = suffix.len() == SUFFIX_LEN
            && suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());

        if prefix_ok && encoded_ok && suffix_ok {
            Ok(Self {
                value: value.to_string(),
            })
        } else {
            Err(DomainError::InvalidConfirmationNumber(value.to_string()))
        }
    }

    /// Returns the full formatted value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ConfirmationNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Encodes a non-negative value in lowercase base36.
fn to_base36(mut n: i64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n <= 0 {
        return String::from("0");
    }
    let mut out: Vec<u8> = Vec::new();
    while n > 0 {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let digit: usize = (n % 36) as usize;
        out.push(DIGITS[digit]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Draws a random suffix from the uppercase base36 alphabet.
fn random_suffix() -> String {
    (0..SUFFIX_LEN)
        .map(|_| {
            #[allow(clippy::cast_possible_truncation)]
            let idx: usize = (rand::random::<u64>() % SUFFIX_ALPHABET.len() as u64) as usize;
            char::from(SUFFIX_ALPHABET[idx])
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_number_has_expected_shape() {
        let number = ConfirmationNumber::generate(1_772_100_000_000);
        let parts: Vec<&str> = number.value().split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "KS");
        assert!(!parts[1].is_empty());
        assert_eq!(parts[2].len(), 5);
    }

    #[test]
    fn test_generated_number_round_trips_through_parse() {
        let number = ConfirmationNumber::generate(1_772_100_000_000);
        let parsed = ConfirmationNumber::parse(number.value()).unwrap();
        assert_eq!(parsed, number);
    }

    #[test]
    fn test_timestamp_segment_encodes_millis() {
        // 36^2 = 1296 encodes as "100" in base36
        let number = ConfirmationNumber::generate(1296);
        assert!(number.value().starts_with("KS-100-"));
    }

    #[test]
    fn test_parse_rejects_malformed_values() {
        assert!(ConfirmationNumber::parse("").is_err());
        assert!(ConfirmationNumber::parse("KS-ABC").is_err());
        assert!(ConfirmationNumber::parse("XX-ABC-12345").is_err());
        assert!(ConfirmationNumber::parse("KS-ABC-1234").is_err());
        assert!(ConfirmationNumber::parse("KS-abc-12345").is_err());
        assert!(ConfirmationNumber::parse("KS-ABC-12345-EXTRA").is_err());
    }

    #[test]
    fn test_to_base36_zero_and_positive() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
