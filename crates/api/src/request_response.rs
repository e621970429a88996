// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract; ids and steps travel as plain strings.

use crate::follow_up::FollowUp;
use chrono::NaiveDate;
use knows_booking::{BookingRecord, WizardState};
use knows_booking_domain::{Catalog, quote};

/// API request to select a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectPackageRequest {
    /// The package id (e.g. "full-day").
    pub package_id: String,
}

/// API request to select a booking date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectDateRequest {
    /// The calendar date to book.
    pub date: NaiveDate,
}

/// API request to select a time slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectTimeSlotRequest {
    /// The slot label (e.g. "10:00 AM").
    pub time_slot: String,
}

/// API request to toggle an add-on in or out of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleAddOnRequest {
    /// The add-on id (e.g. "premium-lighting").
    pub add_on_id: String,
}

/// API request to replace the contact fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnterDetailsRequest {
    /// The client's name.
    pub name: String,
    /// The client's email address.
    pub email: String,
    /// The client's phone number.
    pub phone: String,
    /// Free-text description of the planned shoot.
    pub project_notes: String,
}

/// Contact fields as echoed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactInfo {
    /// The client's name.
    pub name: String,
    /// The client's email address.
    pub email: String,
    /// The client's phone number.
    pub phone: String,
    /// Free-text description of the planned shoot.
    pub project_notes: String,
}

/// The running price for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuoteInfo {
    /// The total price in whole currency units.
    pub total: i64,
    /// The up-front deposit in whole currency units.
    pub deposit: i64,
}

/// The wizard state as presented to the client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WizardStateResponse {
    /// The current step name.
    pub current_step: String,
    /// The selected date, if any.
    pub selected_date: Option<NaiveDate>,
    /// The selected time slot label, if any.
    pub selected_time_slot: Option<String>,
    /// The selected package id.
    pub selected_package: String,
    /// The selected package's display name, when the id is still known.
    pub selected_package_name: Option<String>,
    /// The selected add-on ids, in selection order.
    pub selected_add_ons: Vec<String>,
    /// The contact fields as entered so far.
    pub contact: ContactInfo,
    /// The running quote for the current selection.
    pub quote: QuoteInfo,
}

impl WizardStateResponse {
    /// Builds the client view of a wizard state, including the running
    /// quote.
    #[must_use]
    pub fn from_state(catalog: &Catalog, state: &WizardState) -> Self {
        let price = quote(catalog, &state.selected_package, &state.selected_add_ons);
        Self {
            current_step: state.current_step.to_string(),
            selected_date: state.selected_date,
            selected_time_slot: state.selected_time_slot.clone(),
            selected_package: state.selected_package.value().to_string(),
            selected_package_name: catalog
                .package(&state.selected_package)
                .map(|p| p.name.clone()),
            selected_add_ons: state
                .selected_add_ons
                .iter()
                .map(|id| id.value().to_string())
                .collect(),
            contact: ContactInfo {
                name: state.contact.name.clone(),
                email: state.contact.email.clone(),
                phone: state.contact.phone.clone(),
                project_notes: state.contact.project_notes.clone(),
            },
            quote: QuoteInfo {
                total: price.total,
                deposit: price.deposit,
            },
        }
    }
}

/// Package information for catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PackageInfo {
    /// The stable package id.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The duration label.
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

/// Add-on information for catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddOnInfo {
    /// The stable add-on id.
    pub id: String,
    /// The display name.
    pub name: String,
    /// The price in whole currency units.
    pub price: i64,
    /// An optional short description.
    pub description: Option<String>,
}

/// Time slot information for catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeSlotInfo {
    /// The human-readable label.
    pub label: String,
    /// Whether this slot is offered for selection.
    pub available: bool,
}

/// API response for the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogResponse {
    /// The bookable packages in display order.
    pub packages: Vec<PackageInfo>,
    /// The optional extras in display order.
    pub add_ons: Vec<AddOnInfo>,
    /// The daily start times in display order.
    pub time_slots: Vec<TimeSlotInfo>,
    /// The package pre-selected when a wizard opens.
    pub default_package: String,
}

/// API response for a date availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityResponse {
    /// The checked date.
    pub date: NaiveDate,
    /// Whether the date can be booked.
    pub available: bool,
}

/// A booked add-on as presented on the confirmation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookedAddOnInfo {
    /// The add-on's display name.
    pub name: String,
    /// The add-on's price in whole currency units.
    pub price: i64,
}

/// The scheduled external follow-up as presented to the client.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FollowUpInfo {
    /// The external booking-platform URL to open.
    pub url: String,
    /// Seconds to wait before opening it.
    pub delay_seconds: u64,
}

impl From<&FollowUp> for FollowUpInfo {
    fn from(follow_up: &FollowUp) -> Self {
        Self {
            url: follow_up.url.clone(),
            delay_seconds: follow_up.delay.as_secs(),
        }
    }
}

/// API response for a completed booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingConfirmationResponse {
    /// The generated confirmation number.
    pub confirmation_number: String,
    /// The booked package's display name.
    pub package_name: String,
    /// The booked package's duration label.
    pub package_duration: String,
    /// The booked add-ons with prices.
    pub add_ons: Vec<BookedAddOnInfo>,
    /// The booked date.
    pub date: NaiveDate,
    /// The booked time slot label.
    pub time_slot: String,
    /// The total price in whole currency units.
    pub total: i64,
    /// The up-front deposit in whole currency units.
    pub deposit: i64,
    /// The client's contact details.
    pub contact: ContactInfo,
    /// A success message.
    pub message: String,
    /// The scheduled external follow-up.
    pub follow_up: FollowUpInfo,
}

impl BookingConfirmationResponse {
    /// Builds the confirmation view of a booking record.
    #[must_use]
    pub fn from_record(record: &BookingRecord, follow_up: &FollowUp) -> Self {
        Self {
            confirmation_number: record.confirmation_number.value().to_string(),
            package_name: record.package_name.clone(),
            package_duration: record.package_duration.clone(),
            add_ons: record
                .add_ons
                .iter()
                .map(|a| BookedAddOnInfo {
                    name: a.name.clone(),
                    price: a.price,
                })
                .collect(),
            date: record.date,
            time_slot: record.time_slot.clone(),
            total: record.total,
            deposit: record.deposit,
            contact: ContactInfo {
                name: record.contact.name.clone(),
                email: record.contact.email.clone(),
                phone: record.contact.phone.clone(),
                project_notes: record.contact.project_notes.clone(),
            },
            message: format!(
                "Booking confirmed. A confirmation email is on its way to {}",
                record.contact.email
            ),
            follow_up: FollowUpInfo::from(follow_up),
        }
    }
}

/// API response for advancing the wizard.
///
/// `confirmation` is populated only by the advance that completes the
/// wizard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdvanceResponse {
    /// The wizard state after the advance.
    pub state: WizardStateResponse,
    /// The booking confirmation, when this advance completed the wizard.
    pub confirmation: Option<BookingConfirmationResponse>,
}

/// API response for the downloadable confirmation document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConfirmationDocumentResponse {
    /// The suggested download filename.
    pub filename: String,
    /// The plain-text document body.
    pub content: String,
}

/// Builds the catalog listing response.
#[must_use]
pub fn catalog_response(catalog: &Catalog) -> CatalogResponse {
    CatalogResponse {
        packages: catalog
            .packages()
            .iter()
            .map(|p| PackageInfo {
                id: p.id.value().to_string(),
                name: p.name.clone(),
                duration: p.duration.clone(),
                base_price: p.base_price,
                description: p.description.clone(),
                features: p.features.clone(),
                popular: p.popular,
                luxury: p.luxury,
            })
            .collect(),
        add_ons: catalog
            .add_ons()
            .iter()
            .map(|a| AddOnInfo {
                id: a.id.value().to_string(),
                name: a.name.clone(),
                price: a.price,
                description: a.description.clone(),
            })
            .collect(),
        time_slots: catalog
            .time_slots()
            .iter()
            .map(|s| TimeSlotInfo {
                label: s.label.clone(),
                available: s.available,
            })
            .collect(),
        default_package: catalog.default_package().value().to_string(),
    }
}
