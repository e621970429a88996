// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::{BookingRecord, build_booking_record};
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{TransitionResult, WizardState};
use chrono::{DateTime, Utc};
use knows_booking_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use knows_booking_domain::{
    Catalog, ConfirmationNumber, DomainError, Package, Quote, WizardStep, quote,
    validate_contact_details, validate_date_available, validate_schedule_selected,
};

/// Applies a command to the current wizard state, producing a new state and
/// an audit event.
///
/// Transitions are atomic: validation runs before any field changes, so an
/// `Err` means the caller's state is exactly what it was. Selection
/// commands are rejected outside the step that owns their field, which
/// keeps `Back`-then-edit the only way to revise an earlier step.
///
/// # Arguments
///
/// * `catalog` - The catalog to validate selections against
/// * `state` - The current wizard state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The current instant, used for availability ("today") and for
///   confirmation-number generation at completion
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, the audit event, and
///   (only when the wizard completes) the booking record
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command is not valid on the current step
/// - A selection names an unknown or unavailable catalog entry
/// - A `Continue` gate's required fields are missing or invalid
#[allow(clippy::too_many_lines, clippy::needless_pass_by_value)]
pub fn apply(
    catalog: &Catalog,
    state: &WizardState,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: DateTime<Utc>,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SelectPackage { package_id } => {
            require_step(state, WizardStep::SelectPackage, "select a package")?;

            if catalog.package(&package_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::UnknownPackage(
                    package_id.value().to_string(),
                )));
            }

            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: WizardState = state.clone();
            new_state.selected_package = package_id.clone();
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("SelectPackage"),
                Some(format!("Selected package '{}'", package_id.value())),
            );

            Ok(TransitionResult {
                new_state,
                audit_event: AuditEvent::new(actor, cause, action, before, after),
                booking: None,
            })
        }
        Command::SelectDate { date } => {
            require_step(state, WizardStep::SelectDateTime, "select a date")?;

            validate_date_available(date, now.date_naive(), catalog.blocked_dates())?;

            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: WizardState = state.clone();
            new_state.selected_date = Some(date);
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("SelectDate"),
                Some(format!("Selected date {date}")),
            );

            Ok(TransitionResult {
                new_state,
                audit_event: AuditEvent::new(actor, cause, action, before, after),
                booking: None,
            })
        }
        Command::SelectTimeSlot { label } => {
            require_step(state, WizardStep::SelectDateTime, "select a time slot")?;

            let slot = catalog.time_slot(&label).ok_or_else(|| {
                CoreError::DomainViolation(DomainError::UnknownTimeSlot(label.clone()))
            })?;
            if !slot.available {
                return Err(CoreError::DomainViolation(
                    DomainError::TimeSlotUnavailable(label),
                ));
            }

            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: WizardState = state.clone();
            new_state.selected_time_slot = Some(slot.label.clone());
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("SelectTimeSlot"),
                Some(format!("Selected time slot '{}'", slot.label)),
            );

            Ok(TransitionResult {
                new_state,
                audit_event: AuditEvent::new(actor, cause, action, before, after),
                booking: None,
            })
        }
        Command::ToggleAddOn { add_on_id } => {
            require_step(state, WizardStep::SelectAddOns, "change add-ons")?;

            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: WizardState = state.clone();

            let details: String = if state.has_add_on(&add_on_id) {
                new_state.selected_add_ons.retain(|id| id != &add_on_id);
                format!("Removed add-on '{}'", add_on_id.value())
            } else {
                if catalog.add_on(&add_on_id).is_none() {
                    return Err(CoreError::DomainViolation(DomainError::UnknownAddOn(
                        add_on_id.value().to_string(),
                    )));
                }
                new_state.selected_add_ons.push(add_on_id.clone());
                format!("Added add-on '{}'", add_on_id.value())
            };

            let after: StateSnapshot = new_state.to_snapshot();
            let action: Action = Action::new(String::from("ToggleAddOn"), Some(details));

            Ok(TransitionResult {
                new_state,
                audit_event: AuditEvent::new(actor, cause, action, before, after),
                booking: None,
            })
        }
        Command::EnterDetails { contact } => {
            require_step(state, WizardStep::EnterDetails, "enter contact details")?;

            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: WizardState = state.clone();
            new_state.contact = contact;
            let after: StateSnapshot = new_state.to_snapshot();

            // Contact values stay out of the audit trail.
            let action: Action = Action::new(String::from("EnterDetails"), None);

            Ok(TransitionResult {
                new_state,
                audit_event: AuditEvent::new(actor, cause, action, before, after),
                booking: None,
            })
        }
        Command::Continue => match state.current_step {
            WizardStep::SelectPackage => {
                // The package defaults, so this gate always passes.
                advance(state, WizardStep::SelectDateTime, actor, cause)
            }
            WizardStep::SelectDateTime => {
                validate_schedule_selected(
                    state.selected_date,
                    state.selected_time_slot.as_deref(),
                )?;
                advance(state, WizardStep::SelectAddOns, actor, cause)
            }
            WizardStep::SelectAddOns => advance(state, WizardStep::EnterDetails, actor, cause),
            WizardStep::EnterDetails => complete_booking(catalog, state, actor, cause, now),
            WizardStep::Completed => Err(invalid_step(state, "continue")),
        },
        Command::Back => {
            let target: WizardStep = state
                .current_step
                .previous()
                .ok_or_else(|| invalid_step(state, "go back"))?;

            let before: StateSnapshot = state.to_snapshot();
            let mut new_state: WizardState = state.clone();
            new_state.current_step = target;
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("StepBack"),
                Some(format!(
                    "Returned from {} to {}",
                    state.current_step, target
                )),
            );

            Ok(TransitionResult {
                new_state,
                audit_event: AuditEvent::new(actor, cause, action, before, after),
                booking: None,
            })
        }
        Command::Cancel => {
            let before: StateSnapshot = state.to_snapshot();
            let new_state: WizardState = WizardState::fresh(catalog);
            let after: StateSnapshot = new_state.to_snapshot();

            let action: Action = Action::new(
                String::from("CancelWizard"),
                Some(format!("Cancelled from step {}", state.current_step)),
            );

            Ok(TransitionResult {
                new_state,
                audit_event: AuditEvent::new(actor, cause, action, before, after),
                booking: None,
            })
        }
    }
}

/// Advances the step machine without touching selections.
fn advance(
    state: &WizardState,
    target: WizardStep,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let before: StateSnapshot = state.to_snapshot();
    let mut new_state: WizardState = state.clone();
    new_state.current_step = target;
    let after: StateSnapshot = new_state.to_snapshot();

    let action: Action = Action::new(
        String::from("AdvanceStep"),
        Some(format!(
            "Advanced from {} to {}",
            state.current_step, target
        )),
    );

    Ok(TransitionResult {
        new_state,
        audit_event: AuditEvent::new(actor, cause, action, before, after),
        booking: None,
    })
}

/// Runs the final gate and materializes the booking record.
fn complete_booking(
    catalog: &Catalog,
    state: &WizardState,
    actor: Actor,
    cause: Cause,
    now: DateTime<Utc>,
) -> Result<TransitionResult, CoreError> {
    validate_contact_details(&state.contact)?;

    // Guard against drafts that skipped the schedule step.
    validate_schedule_selected(state.selected_date, state.selected_time_slot.as_deref())?;

    let package: &Package = catalog.package(&state.selected_package).ok_or_else(|| {
        CoreError::DomainViolation(DomainError::UnknownPackage(
            state.selected_package.value().to_string(),
        ))
    })?;

    let date = state
        .selected_date
        .ok_or_else(|| CoreError::Internal(String::from("schedule validated but date missing")))?;
    let time_slot: String = state.selected_time_slot.clone().ok_or_else(|| {
        CoreError::Internal(String::from("schedule validated but time slot missing"))
    })?;

    let price: Quote = quote(catalog, &state.selected_package, &state.selected_add_ons);
    let confirmation: ConfirmationNumber = ConfirmationNumber::generate(now.timestamp_millis());

    let booking: BookingRecord = build_booking_record(
        catalog,
        package.name.clone(),
        package.duration.clone(),
        &state.selected_add_ons,
        date,
        time_slot,
        price,
        state.contact.clone(),
        confirmation.clone(),
        now,
    );

    let before: StateSnapshot = state.to_snapshot();
    let mut new_state: WizardState = state.clone();
    new_state.current_step = WizardStep::Completed;
    let after: StateSnapshot = new_state.to_snapshot();

    let action: Action = Action::new(
        String::from("CompleteBooking"),
        Some(format!(
            "Booking {} for '{}' on {}",
            confirmation,
            booking.package_name,
            booking.date
        )),
    );

    Ok(TransitionResult {
        new_state,
        audit_event: AuditEvent::new(actor, cause, action, before, after),
        booking: Some(booking),
    })
}

/// Rejects a selection command issued outside the step that owns it.
fn require_step(
    state: &WizardState,
    expected: WizardStep,
    action: &str,
) -> Result<(), CoreError> {
    if state.current_step == expected {
        Ok(())
    } else {
        Err(invalid_step(state, action))
    }
}

fn invalid_step(state: &WizardState, action: &str) -> CoreError {
    CoreError::DomainViolation(DomainError::InvalidStepTransition {
        from: state.current_step.to_string(),
        action: action.to_string(),
    })
}
