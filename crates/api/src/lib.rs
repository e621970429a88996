// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod confirmation_doc;
mod error;
mod follow_up;
mod handlers;
mod notifier;
mod request_response;

#[cfg(test)]
mod tests;

pub use confirmation_doc::{confirmation_filename, render_confirmation_text};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use follow_up::{BOOKING_PLATFORM_URL, FOLLOW_UP_DELAY, FollowUp};
pub use handlers::{
    AdvanceOutcome, ApiResult, OpenWizardResult, advance_wizard, cancel_wizard, check_availability,
    confirmation_document, enter_details, get_catalog, open_wizard, select_date, select_package,
    select_time_slot, step_back, toggle_add_on,
};
pub use notifier::{Notifier, TracingNotifier};
pub use request_response::{
    AddOnInfo, AdvanceResponse, AvailabilityResponse, BookedAddOnInfo,
    BookingConfirmationResponse, CatalogResponse, ConfirmationDocumentResponse, ContactInfo,
    EnterDetailsRequest, FollowUpInfo, PackageInfo, QuoteInfo, SelectDateRequest,
    SelectPackageRequest, SelectTimeSlotRequest, TimeSlotInfo, ToggleAddOnRequest,
    WizardStateResponse, catalog_response,
};
