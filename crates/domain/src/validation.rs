// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::ContactDetails;
use chrono::NaiveDate;

/// Validates the contact fields required to complete a booking.
///
/// Name, email, and phone must be non-empty after trimming; the email must
/// additionally have a plausible `local@domain` shape. Project notes are
/// optional and never validated.
///
/// # Arguments
///
/// * `contact` - The contact details to validate
///
/// # Errors
///
/// Returns an error naming the first field that fails validation.
pub fn validate_contact_details(contact: &ContactDetails) -> Result<(), DomainError> {
    if contact.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    validate_email_shape(&contact.email)?;

    if contact.phone.trim().is_empty() {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone number cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that both schedule fields have been selected.
///
/// This is the gate for leaving the date/time step: a date and a time slot
/// must both be present. Their values were already validated against the
/// catalog when they were selected.
///
/// # Errors
///
/// Returns `DomainError::MissingDate` or `DomainError::MissingTimeSlot` for
/// the first missing field.
pub fn validate_schedule_selected(
    date: Option<NaiveDate>,
    time_slot: Option<&str>,
) -> Result<(), DomainError> {
    if date.is_none() {
        return Err(DomainError::MissingDate);
    }
    if time_slot.is_none_or(|s| s.trim().is_empty()) {
        return Err(DomainError::MissingTimeSlot);
    }
    Ok(())
}

/// Checks an email for a minimal `local@domain` shape.
///
/// This is a coarse gate, not RFC validation: exactly one '@' with
/// non-empty text on both sides.
fn validate_email_shape(email: &str) -> Result<(), DomainError> {
    let trimmed: &str = email.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email cannot be empty",
        )));
    }

    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must contain exactly one '@'",
        )));
    };

    if local.is_empty() || domain.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must have text before and after '@'",
        )));
    }

    Ok(())
}
