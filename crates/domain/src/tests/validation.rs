// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::ContactDetails;
use crate::validation::{validate_contact_details, validate_schedule_selected};
use chrono::NaiveDate;

fn complete_contact() -> ContactDetails {
    ContactDetails::new(
        "Amara Knows",
        "amara@example.com",
        "555-0114",
        "Lookbook shoot for the fall line",
    )
}

#[test]
fn test_complete_contact_passes() {
    assert!(validate_contact_details(&complete_contact()).is_ok());
}

#[test]
fn test_empty_name_rejected() {
    let mut contact: ContactDetails = complete_contact();
    contact.name = String::from("   ");
    assert!(matches!(
        validate_contact_details(&contact),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_empty_email_rejected() {
    let mut contact: ContactDetails = complete_contact();
    contact.email = String::new();
    assert!(matches!(
        validate_contact_details(&contact),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_email_without_at_rejected() {
    let mut contact: ContactDetails = complete_contact();
    contact.email = String::from("amara.example.com");
    assert!(matches!(
        validate_contact_details(&contact),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_email_with_empty_domain_rejected() {
    let mut contact: ContactDetails = complete_contact();
    contact.email = String::from("amara@");
    assert!(matches!(
        validate_contact_details(&contact),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_empty_phone_rejected() {
    let mut contact: ContactDetails = complete_contact();
    contact.phone = String::from(" ");
    assert!(matches!(
        validate_contact_details(&contact),
        Err(DomainError::InvalidPhone(_))
    ));
}

#[test]
fn test_empty_project_notes_allowed() {
    let mut contact: ContactDetails = complete_contact();
    contact.project_notes = String::new();
    assert!(validate_contact_details(&contact).is_ok());
}

#[test]
fn test_schedule_requires_date_first() {
    let err = validate_schedule_selected(None, None).unwrap_err();
    assert_eq!(err, DomainError::MissingDate);
}

#[test]
fn test_schedule_requires_time_slot() {
    let date = NaiveDate::from_ymd_opt(2026, 7, 1);
    let err = validate_schedule_selected(date, None).unwrap_err();
    assert_eq!(err, DomainError::MissingTimeSlot);

    let err = validate_schedule_selected(date, Some("  ")).unwrap_err();
    assert_eq!(err, DomainError::MissingTimeSlot);
}

#[test]
fn test_schedule_with_both_fields_passes() {
    let date = NaiveDate::from_ymd_opt(2026, 7, 1);
    assert!(validate_schedule_selected(date, Some("10:00 AM")).is_ok());
}
