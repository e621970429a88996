// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::BookingRecord;
use chrono::NaiveDate;
use knows_booking_audit::{AuditEvent, StateSnapshot};
use knows_booking_domain::{AddOnId, Catalog, ContactDetails, PackageId, WizardStep};
use serde::{Deserialize, Serialize};

/// The in-progress wizard selection.
///
/// State is immutable from the caller's point of view: transitions take the
/// current state by reference and return a new one, so a failed validation
/// leaves the old state untouched.
///
/// The selected package always holds a value (the catalog default applies
/// from the moment the wizard opens); date and time slot have no default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    /// The step the wizard is currently on.
    pub current_step: WizardStep,
    /// The selected booking date, if any.
    pub selected_date: Option<NaiveDate>,
    /// The selected time slot label, if any.
    pub selected_time_slot: Option<String>,
    /// The selected package. Defaults to the catalog's default package.
    pub selected_package: PackageId,
    /// The selected add-ons, in selection order, no duplicates.
    pub selected_add_ons: Vec<AddOnId>,
    /// The contact fields as entered so far.
    pub contact: ContactDetails,
}

impl WizardState {
    /// Creates the default state for a freshly opened wizard.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The catalog supplying the default package
    #[must_use]
    pub fn fresh(catalog: &Catalog) -> Self {
        Self {
            current_step: WizardStep::SelectPackage,
            selected_date: None,
            selected_time_slot: None,
            selected_package: catalog.default_package().clone(),
            selected_add_ons: Vec::new(),
            contact: ContactDetails::default(),
        }
    }

    /// Returns whether an add-on is currently selected.
    #[must_use]
    pub fn has_add_on(&self, id: &AddOnId) -> bool {
        self.selected_add_ons.contains(id)
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "step={},date={},slot={},package={},add_ons={},contact_name={}",
            self.current_step,
            self.selected_date
                .map_or_else(|| String::from("none"), |d| d.to_string()),
            self.selected_time_slot.as_deref().unwrap_or("none"),
            self.selected_package.value(),
            self.selected_add_ons.len(),
            if self.contact.name.trim().is_empty() {
                "unset"
            } else {
                "set"
            },
        ))
    }
}

/// The result of a successful wizard transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. `booking` is populated only by the transition that reaches
/// `Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: WizardState,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The booking record, when this transition completed the wizard.
    pub booking: Option<BookingRecord>,
}
