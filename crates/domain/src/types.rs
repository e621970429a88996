// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the step the booking wizard is currently on.
///
/// Steps form a fixed forward sequence; `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WizardStep {
    /// Initial step. A package is always selected here (a default applies).
    #[default]
    SelectPackage,
    /// Date and time slot selection. Both are required to advance.
    SelectDateTime,
    /// Optional add-on selection. May be advanced past without choices.
    SelectAddOns,
    /// Contact detail entry. Name, email, and phone are required to advance.
    EnterDetails,
    /// Terminal step. A booking record has been produced.
    Completed,
}

impl FromStr for WizardStep {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SelectPackage" => Ok(Self::SelectPackage),
            "SelectDateTime" => Ok(Self::SelectDateTime),
            "SelectAddOns" => Ok(Self::SelectAddOns),
            "EnterDetails" => Ok(Self::EnterDetails),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidWizardStep(s.to_string())),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl WizardStep {
    /// Converts this step to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectPackage => "SelectPackage",
            Self::SelectDateTime => "SelectDateTime",
            Self::SelectAddOns => "SelectAddOns",
            Self::EnterDetails => "EnterDetails",
            Self::Completed => "Completed",
        }
    }

    /// Returns the step that follows this one, if any.
    ///
    /// Forward order is:
    /// - `SelectPackage` → `SelectDateTime`
    /// - `SelectDateTime` → `SelectAddOns`
    /// - `SelectAddOns` → `EnterDetails`
    /// - `EnterDetails` → `Completed`
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::SelectPackage => Some(Self::SelectDateTime),
            Self::SelectDateTime => Some(Self::SelectAddOns),
            Self::SelectAddOns => Some(Self::EnterDetails),
            Self::EnterDetails => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Returns the step that precedes this one, if any.
    ///
    /// `Completed` has no predecessor: once a booking record exists the
    /// wizard cannot be walked backwards out of it.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::SelectPackage | Self::Completed => None,
            Self::SelectDateTime => Some(Self::SelectPackage),
            Self::SelectAddOns => Some(Self::SelectDateTime),
            Self::EnterDetails => Some(Self::SelectAddOns),
        }
    }

    /// Checks if a transition from this step to another is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::SelectPackage, Self::SelectDateTime)
                | (Self::SelectDateTime, Self::SelectAddOns)
                | (Self::SelectAddOns, Self::EnterDetails)
                | (Self::EnterDetails, Self::Completed)
        )
    }

    /// Returns whether this is the terminal step.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Represents a package identifier.
///
/// Package ids are stable string keys (e.g. "full-day"), normalized to
/// lowercase for case-insensitive lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId {
    /// The id value.
    value: String,
}

impl PackageId {
    /// Creates a new `PackageId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The id value (will be normalized to lowercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_lowercase(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents an add-on identifier.
///
/// Add-on ids are stable string keys (e.g. "premium-lighting"), normalized
/// to lowercase for case-insensitive lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddOnId {
    /// The id value.
    value: String,
}

impl AddOnId {
    /// Creates a new `AddOnId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The id value (will be normalized to lowercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_lowercase(),
        }
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Represents a bookable studio package.
///
/// Packages are immutable reference data, created once at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// The stable package id.
    pub id: PackageId,
    /// The display name (e.g. "Full Day Session").
    pub name: String,
    /// The human-readable duration label (e.g. "8 hours").
    pub duration: String,
    /// The base price in whole currency units.
    pub base_price: i64,
    /// A short marketing description.
    pub description: String,
    /// Ordered list of included features.
    pub features: Vec<String>,
    /// Whether this package is highlighted as the popular choice.
    pub popular: bool,
    /// Whether this package is presented as the luxury tier.
    pub luxury: bool,
}

impl Package {
    /// Creates a new `Package`.
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        duration: &str,
        base_price: i64,
        description: &str,
        features: Vec<String>,
    ) -> Self {
        Self {
            id: PackageId::new(id),
            name: name.to_string(),
            duration: duration.to_string(),
            base_price,
            description: description.to_string(),
            features,
            popular: false,
            luxury: false,
        }
    }

    /// Marks this package as the popular choice.
    #[must_use]
    pub const fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    /// Marks this package as the luxury tier.
    #[must_use]
    pub const fn luxury(mut self) -> Self {
        self.luxury = true;
        self
    }
}

/// Represents an optional paid extra attached to a base package.
///
/// Add-ons are immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    /// The stable add-on id.
    pub id: AddOnId,
    /// The display name (e.g. "Premium Lighting Kit").
    pub name: String,
    /// The price in whole currency units.
    pub price: i64,
    /// An optional short description.
    pub description: Option<String>,
}

impl AddOn {
    /// Creates a new `AddOn`.
    #[must_use]
    pub fn new(id: &str, name: &str, price: i64, description: Option<&str>) -> Self {
        Self {
            id: AddOnId::new(id),
            name: name.to_string(),
            price,
            description: description.map(ToString::to_string),
        }
    }
}

/// Represents a bookable start time on a given day.
///
/// Availability is static reference data; it is not derived from existing
/// reservations, so two bookings may name the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The human-readable label (e.g. "10:00 AM").
    pub label: String,
    /// Whether this slot is offered for selection.
    pub available: bool,
}

impl TimeSlot {
    /// Creates a new `TimeSlot`.
    #[must_use]
    pub fn new(label: &str, available: bool) -> Self {
        Self {
            label: label.to_string(),
            available,
        }
    }
}

/// Contact details collected on the final wizard step.
///
/// All fields start empty and are filled in by user input. Required-field
/// validation happens when the wizard advances, not on entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    /// The client's name.
    pub name: String,
    /// The client's email address.
    pub email: String,
    /// The client's phone number.
    pub phone: String,
    /// Free-text description of the planned shoot.
    pub project_notes: String,
}

impl ContactDetails {
    /// Creates new `ContactDetails`.
    #[must_use]
    pub fn new(name: &str, email: &str, phone: &str, project_notes: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            project_notes: project_notes.to_string(),
        }
    }
}
