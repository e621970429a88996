// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the booking funnel.
//!
//! Each state-changing handler translates its request into a core command,
//! applies it, persists the audit event, and mirrors the new state into
//! the draft store. A blocked transition surfaces as exactly one error
//! notice plus an `ApiError`; the caller's state is untouched.

use chrono::{DateTime, NaiveDate, Utc};
use knows_booking::{BookingRecord, Command, TransitionResult, WizardState, apply};
use knows_booking_audit::{Actor, AuditEvent, Cause};
use knows_booking_domain::{
    AddOnId, Catalog, ContactDetails, PackageId, is_date_available,
};
use knows_booking_persistence::Persistence;
use tracing::{debug, info};

use crate::confirmation_doc::{confirmation_filename, render_confirmation_text};
use crate::error::{ApiError, translate_core_error};
use crate::follow_up::FollowUp;
use crate::notifier::Notifier;
use crate::request_response::{
    AdvanceResponse, AvailabilityResponse, BookingConfirmationResponse, CatalogResponse,
    ConfirmationDocumentResponse, EnterDetailsRequest, SelectDateRequest, SelectPackageRequest,
    SelectTimeSlotRequest, ToggleAddOnRequest, WizardStateResponse, catalog_response,
};

/// The result of an API operation that includes both the response and the
/// audit trail.
///
/// This ensures that successful API operations always produce an audit
/// event, and hands the caller the state to retain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: WizardState,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
}

/// The outcome of opening a wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenWizardResult {
    /// The initial wizard state (rehydrated or fresh).
    pub state: WizardState,
    /// Whether a saved draft was rehydrated.
    pub resumed_draft: bool,
}

/// The outcome of advancing the wizard.
///
/// This carries the raw booking record alongside the response DTO so the
/// caller can retain it (e.g. for the confirmation document) without
/// reconstructing it from display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceOutcome {
    /// The API response.
    pub response: AdvanceResponse,
    /// The new state after the advance.
    pub new_state: WizardState,
    /// The audit event generated by this advance.
    pub audit_event: AuditEvent,
    /// The event ID of the persisted audit event.
    pub event_id: i64,
    /// The booking record, when this advance completed the wizard.
    pub booking: Option<BookingRecord>,
}

/// Opens a wizard session, rehydrating a fresh saved draft when one
/// exists.
///
/// Stale or unreadable drafts are ignored by the persistence layer; this
/// handler always yields a usable state.
///
/// # Errors
///
/// Returns an error only if the draft store cannot be read.
pub fn open_wizard(
    persistence: &mut Persistence,
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> Result<OpenWizardResult, ApiError> {
    let draft: Option<WizardState> =
        persistence.load_draft(now).map_err(|e| ApiError::Internal {
            message: format!("Failed to load draft: {e}"),
        })?;

    match draft {
        Some(state) => {
            info!(step = %state.current_step, "Resumed wizard from saved draft");
            Ok(OpenWizardResult {
                state,
                resumed_draft: true,
            })
        }
        None => Ok(OpenWizardResult {
            state: WizardState::fresh(catalog),
            resumed_draft: false,
        }),
    }
}

/// Returns the catalog listing.
#[must_use]
pub fn get_catalog(catalog: &Catalog) -> CatalogResponse {
    catalog_response(catalog)
}

/// Checks whether a date can be booked.
#[must_use]
pub fn check_availability(
    catalog: &Catalog,
    date: NaiveDate,
    today: NaiveDate,
) -> AvailabilityResponse {
    AvailabilityResponse {
        date,
        available: is_date_available(date, today, catalog.blocked_dates()),
    }
}

/// Selects a package via the API boundary.
///
/// # Errors
///
/// Returns an error if the package is unknown or the wizard is not on the
/// package step.
#[allow(clippy::too_many_arguments)]
pub fn select_package(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    request: SelectPackageRequest,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<ApiResult<WizardStateResponse>, ApiError> {
    let command: Command = Command::SelectPackage {
        package_id: PackageId::new(&request.package_id),
    };
    execute_selection(
        persistence,
        catalog,
        state,
        command,
        session_token,
        cause,
        notifier,
        now,
    )
}

/// Selects a booking date via the API boundary.
///
/// # Errors
///
/// Returns an error if the date is unavailable or the wizard is not on the
/// schedule step.
#[allow(clippy::too_many_arguments)]
pub fn select_date(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    request: SelectDateRequest,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<ApiResult<WizardStateResponse>, ApiError> {
    let command: Command = Command::SelectDate { date: request.date };
    execute_selection(
        persistence,
        catalog,
        state,
        command,
        session_token,
        cause,
        notifier,
        now,
    )
}

/// Selects a time slot via the API boundary.
///
/// # Errors
///
/// Returns an error if the slot is unknown or unavailable, or the wizard
/// is not on the schedule step.
#[allow(clippy::too_many_arguments)]
pub fn select_time_slot(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    request: SelectTimeSlotRequest,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<ApiResult<WizardStateResponse>, ApiError> {
    let command: Command = Command::SelectTimeSlot {
        label: request.time_slot,
    };
    execute_selection(
        persistence,
        catalog,
        state,
        command,
        session_token,
        cause,
        notifier,
        now,
    )
}

/// Toggles an add-on via the API boundary.
///
/// # Errors
///
/// Returns an error if the add-on is unknown or the wizard is not on the
/// add-on step.
#[allow(clippy::too_many_arguments)]
pub fn toggle_add_on(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    request: ToggleAddOnRequest,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<ApiResult<WizardStateResponse>, ApiError> {
    let command: Command = Command::ToggleAddOn {
        add_on_id: AddOnId::new(&request.add_on_id),
    };
    execute_selection(
        persistence,
        catalog,
        state,
        command,
        session_token,
        cause,
        notifier,
        now,
    )
}

/// Replaces the contact fields via the API boundary.
///
/// Partial input is accepted; required-field validation runs when the
/// wizard advances.
///
/// # Errors
///
/// Returns an error if the wizard is not on the details step.
#[allow(clippy::too_many_arguments)]
pub fn enter_details(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    request: EnterDetailsRequest,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<ApiResult<WizardStateResponse>, ApiError> {
    let command: Command = Command::EnterDetails {
        contact: ContactDetails::new(
            &request.name,
            &request.email,
            &request.phone,
            &request.project_notes,
        ),
    };
    execute_selection(
        persistence,
        catalog,
        state,
        command,
        session_token,
        cause,
        notifier,
        now,
    )
}

/// Advances the wizard one step via the API boundary.
///
/// From the details step this completes the booking: the draft is cleared,
/// a success notice is emitted, and the response carries the confirmation
/// plus the scheduled external follow-up.
///
/// # Errors
///
/// Returns an error if the current step's required fields are missing or
/// invalid.
pub fn advance_wizard(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<AdvanceOutcome, ApiError> {
    let result: TransitionResult =
        run_transition(catalog, state, Command::Continue, session_token, cause, now)
            .inspect_err(|e| notifier.error(&e.to_string()))?;

    let event_id: i64 = persist_event(persistence, &result.audit_event, now)?;

    let confirmation: Option<BookingConfirmationResponse> = match &result.booking {
        Some(record) => {
            persistence.clear_draft().map_err(|e| ApiError::Internal {
                message: format!("Failed to clear draft: {e}"),
            })?;

            let follow_up: FollowUp = FollowUp::external_booking();
            let response: BookingConfirmationResponse =
                BookingConfirmationResponse::from_record(record, &follow_up);
            notifier.success(&response.message);
            info!(
                confirmation = %record.confirmation_number,
                total = record.total,
                "Booking completed"
            );
            Some(response)
        }
        None => {
            save_draft(persistence, &result.new_state, now)?;
            None
        }
    };

    Ok(AdvanceOutcome {
        response: AdvanceResponse {
            state: WizardStateResponse::from_state(catalog, &result.new_state),
            confirmation,
        },
        new_state: result.new_state,
        audit_event: result.audit_event,
        event_id,
        booking: result.booking,
    })
}

/// Walks the wizard back one step via the API boundary.
///
/// # Errors
///
/// Returns an error from the initial or terminal step.
pub fn step_back(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<ApiResult<WizardStateResponse>, ApiError> {
    execute_selection(
        persistence,
        catalog,
        state,
        Command::Back,
        session_token,
        cause,
        notifier,
        now,
    )
}

/// Cancels the wizard via the API boundary, resetting to defaults and
/// removing the saved draft.
///
/// # Errors
///
/// Returns an error if the audit event or draft store write fails.
pub fn cancel_wizard(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<ApiResult<WizardStateResponse>, ApiError> {
    let result: TransitionResult =
        run_transition(catalog, state, Command::Cancel, session_token, cause, now)
            .inspect_err(|e| notifier.error(&e.to_string()))?;

    let event_id: i64 = persist_event(persistence, &result.audit_event, now)?;
    persistence.clear_draft().map_err(|e| ApiError::Internal {
        message: format!("Failed to clear draft: {e}"),
    })?;

    debug!("Wizard cancelled and draft cleared");

    Ok(ApiResult {
        response: WizardStateResponse::from_state(catalog, &result.new_state),
        new_state: result.new_state,
        audit_event: result.audit_event,
        event_id,
    })
}

/// Renders the downloadable confirmation document for a booking.
#[must_use]
pub fn confirmation_document(record: &BookingRecord) -> ConfirmationDocumentResponse {
    ConfirmationDocumentResponse {
        filename: confirmation_filename(record),
        content: render_confirmation_text(record),
    }
}

/// Applies a selection-style command, persists its audit event, and
/// mirrors the new state into the draft store.
#[allow(clippy::too_many_arguments)]
fn execute_selection(
    persistence: &mut Persistence,
    catalog: &Catalog,
    state: &WizardState,
    command: Command,
    session_token: &str,
    cause: Cause,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<ApiResult<WizardStateResponse>, ApiError> {
    let result: TransitionResult =
        run_transition(catalog, state, command, session_token, cause, now)
            .inspect_err(|e| notifier.error(&e.to_string()))?;

    let event_id: i64 = persist_event(persistence, &result.audit_event, now)?;
    save_draft(persistence, &result.new_state, now)?;

    Ok(ApiResult {
        response: WizardStateResponse::from_state(catalog, &result.new_state),
        new_state: result.new_state,
        audit_event: result.audit_event,
        event_id,
    })
}

/// Applies a core command, translating failures to API errors.
fn run_transition(
    catalog: &Catalog,
    state: &WizardState,
    command: Command,
    session_token: &str,
    cause: Cause,
    now: DateTime<Utc>,
) -> Result<TransitionResult, ApiError> {
    let actor: Actor = Actor::new(session_token.to_string(), String::from("visitor"));
    apply(catalog, state, command, actor, cause, now).map_err(translate_core_error)
}

fn persist_event(
    persistence: &mut Persistence,
    event: &AuditEvent,
    now: DateTime<Utc>,
) -> Result<i64, ApiError> {
    persistence
        .persist_audit_event(event, now)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to persist audit event: {e}"),
        })
}

fn save_draft(
    persistence: &mut Persistence,
    state: &WizardState,
    now: DateTime<Utc>,
) -> Result<(), ApiError> {
    persistence
        .save_draft(state, now)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to save draft: {e}"),
        })
}
