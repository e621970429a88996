// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use knows_booking_domain::{AddOnId, ContactDetails, PackageId};

/// A command represents user intent as data only.
///
/// Commands are the only way to request wizard state changes. Selection
/// commands are scoped to the step that owns their field; `Continue`,
/// `Back`, and `Cancel` drive the step machine itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose a package. Valid on the `SelectPackage` step.
    SelectPackage {
        /// The package to select.
        package_id: PackageId,
    },
    /// Choose a booking date. Valid on the `SelectDateTime` step.
    SelectDate {
        /// The calendar date to book.
        date: NaiveDate,
    },
    /// Choose a time slot. Valid on the `SelectDateTime` step.
    SelectTimeSlot {
        /// The slot label (e.g. "10:00 AM").
        label: String,
    },
    /// Toggle an add-on in or out of the selection. Valid on the
    /// `SelectAddOns` step.
    ToggleAddOn {
        /// The add-on to toggle.
        add_on_id: AddOnId,
    },
    /// Replace the contact fields with the given values. Valid on the
    /// `EnterDetails` step; partial input is accepted, validation runs on
    /// `Continue`.
    EnterDetails {
        /// The contact fields as currently entered.
        contact: ContactDetails,
    },
    /// Advance to the next step if the current step's required fields are
    /// populated. From `EnterDetails` this completes the booking.
    Continue,
    /// Return to the previous step without clearing entered data.
    Back,
    /// Reset the wizard to its default state.
    Cancel,
}
