// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, NaiveDate, Utc};
use knows_booking_domain::{Catalog, ConfirmationNumber, ContactDetails, Quote};
use serde::{Deserialize, Serialize};

/// A booked add-on, resolved to its display name and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedAddOn {
    /// The add-on's display name.
    pub name: String,
    /// The add-on's price in whole currency units.
    pub price: i64,
}

/// The finalized output of a completed wizard.
///
/// A booking record is a flattened, denormalized snapshot: it owns copies
/// of display strings and computed numbers and holds no reference back to
/// the wizard state or the catalog. Created once at completion, immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// The generated confirmation number.
    pub confirmation_number: ConfirmationNumber,
    /// The booked package's display name.
    pub package_name: String,
    /// The booked package's duration label.
    pub package_duration: String,
    /// The booked add-ons, resolved to display names.
    pub add_ons: Vec<BookedAddOn>,
    /// The booked date.
    pub date: NaiveDate,
    /// The booked time slot label.
    pub time_slot: String,
    /// The total price in whole currency units.
    pub total: i64,
    /// The up-front deposit in whole currency units.
    pub deposit: i64,
    /// A copy of the client's contact details.
    pub contact: ContactDetails,
    /// When the booking was completed.
    pub booked_at: DateTime<Utc>,
}

/// Resolves a completed selection into a booking record.
///
/// Add-on ids no longer present in the catalog are skipped, matching the
/// pricing leniency: they contributed nothing to the quote and appear
/// nowhere on the record.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_booking_record(
    catalog: &Catalog,
    package_name: String,
    package_duration: String,
    add_on_ids: &[knows_booking_domain::AddOnId],
    date: NaiveDate,
    time_slot: String,
    quote: Quote,
    contact: ContactDetails,
    confirmation_number: ConfirmationNumber,
    booked_at: DateTime<Utc>,
) -> BookingRecord {
    let add_ons: Vec<BookedAddOn> = add_on_ids
        .iter()
        .filter_map(|id| catalog.add_on(id))
        .map(|a| BookedAddOn {
            name: a.name.clone(),
            price: a.price,
        })
        .collect();

    BookingRecord {
        confirmation_number,
        package_name,
        package_duration,
        add_ons,
        date,
        time_slot,
        total: quote.total,
        deposit: quote.deposit,
        contact,
        booked_at,
    }
}
