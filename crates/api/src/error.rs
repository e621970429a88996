// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use knows_booking::CoreError;
use knows_booking_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownPackage(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Package"),
            message: format!("Package '{id}' does not exist"),
        },
        DomainError::UnknownAddOn(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Add-on"),
            message: format!("Add-on '{id}' does not exist"),
        },
        DomainError::UnknownTimeSlot(label) => ApiError::ResourceNotFound {
            resource_type: String::from("Time slot"),
            message: format!("Time slot '{label}' does not exist"),
        },
        DomainError::TimeSlotUnavailable(label) => ApiError::DomainRuleViolation {
            rule: String::from("slot_availability"),
            message: format!("Time slot '{label}' is not available"),
        },
        DomainError::DateInPast { date, today } => ApiError::DomainRuleViolation {
            rule: String::from("date_availability"),
            message: format!("Date {date} is before the current day {today}"),
        },
        DomainError::DateUnavailable { date } => ApiError::DomainRuleViolation {
            rule: String::from("date_availability"),
            message: format!("Date {date} is not available for booking"),
        },
        DomainError::MissingDate => ApiError::InvalidInput {
            field: String::from("date"),
            message: String::from("A booking date must be selected"),
        },
        DomainError::MissingTimeSlot => ApiError::InvalidInput {
            field: String::from("time_slot"),
            message: String::from("A time slot must be selected"),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidPhone(msg) => ApiError::InvalidInput {
            field: String::from("phone"),
            message: msg,
        },
        DomainError::InvalidWizardStep(s) => ApiError::InvalidInput {
            field: String::from("step"),
            message: format!("Unknown wizard step: {s}"),
        },
        DomainError::InvalidStepTransition { from, action } => ApiError::DomainRuleViolation {
            rule: String::from("step_order"),
            message: format!("Cannot {action} from step {from}"),
        },
        DomainError::InvalidConfirmationNumber(s) => ApiError::InvalidInput {
            field: String::from("confirmation_number"),
            message: format!("Invalid confirmation number: {s}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}
