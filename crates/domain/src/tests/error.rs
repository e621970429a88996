// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;

#[test]
fn test_unknown_package_display() {
    let err = DomainError::UnknownPackage(String::from("overnight"));
    assert_eq!(err.to_string(), "Package 'overnight' does not exist");
}

#[test]
fn test_date_in_past_display_names_both_days() {
    let err = DomainError::DateInPast {
        date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        today: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
    };
    let message: String = err.to_string();
    assert!(message.contains("2026-06-01"));
    assert!(message.contains("2026-06-15"));
}

#[test]
fn test_invalid_step_transition_display() {
    let err = DomainError::InvalidStepTransition {
        from: String::from("SelectPackage"),
        action: String::from("go back"),
    };
    assert_eq!(err.to_string(), "Cannot go back from step SelectPackage");
}

#[test]
fn test_missing_field_displays() {
    assert_eq!(
        DomainError::MissingDate.to_string(),
        "A booking date must be selected"
    );
    assert_eq!(
        DomainError::MissingTimeSlot.to_string(),
        "A time slot must be selected"
    );
}

#[test]
fn test_errors_implement_std_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(DomainError::UnknownAddOn(String::from("drone-operator")));
    assert!(err.to_string().contains("drone-operator"));
}
