// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The package id does not exist in the catalog.
    UnknownPackage(String),
    /// The add-on id does not exist in the catalog.
    UnknownAddOn(String),
    /// The time slot label does not exist in the catalog.
    UnknownTimeSlot(String),
    /// The time slot exists but is not offered for selection.
    TimeSlotUnavailable(String),
    /// The date is before the current day.
    DateInPast {
        /// The rejected date.
        date: NaiveDate,
        /// The current day used for the comparison.
        today: NaiveDate,
    },
    /// The date is blocked for booking.
    DateUnavailable {
        /// The rejected date.
        date: NaiveDate,
    },
    /// No date has been selected yet.
    MissingDate,
    /// No time slot has been selected yet.
    MissingTimeSlot,
    /// The client name is empty or invalid.
    InvalidName(String),
    /// The client email is empty or invalid.
    InvalidEmail(String),
    /// The client phone number is empty or invalid.
    InvalidPhone(String),
    /// The wizard step string is not recognized.
    InvalidWizardStep(String),
    /// The requested action is not valid from the current wizard step.
    InvalidStepTransition {
        /// The step the wizard is on.
        from: String,
        /// The action that was attempted.
        action: String,
    },
    /// The confirmation number string does not match the expected shape.
    InvalidConfirmationNumber(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPackage(id) => write!(f, "Package '{id}' does not exist"),
            Self::UnknownAddOn(id) => write!(f, "Add-on '{id}' does not exist"),
            Self::UnknownTimeSlot(label) => write!(f, "Time slot '{label}' does not exist"),
            Self::TimeSlotUnavailable(label) => {
                write!(f, "Time slot '{label}' is not available")
            }
            Self::DateInPast { date, today } => {
                write!(f, "Date {date} is before the current day {today}")
            }
            Self::DateUnavailable { date } => {
                write!(f, "Date {date} is not available for booking")
            }
            Self::MissingDate => write!(f, "A booking date must be selected"),
            Self::MissingTimeSlot => write!(f, "A time slot must be selected"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidWizardStep(s) => write!(f, "Unknown wizard step: {s}"),
            Self::InvalidStepTransition { from, action } => {
                write!(f, "Cannot {action} from step {from}")
            }
            Self::InvalidConfirmationNumber(s) => {
                write!(f, "Invalid confirmation number: {s}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
