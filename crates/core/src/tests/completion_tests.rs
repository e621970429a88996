// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    apply_ok, complete_contact, create_test_actor, create_test_catalog, create_test_cause, date,
    state_at_details, test_now,
};
use crate::{BookingRecord, Command, CoreError, TransitionResult, WizardState, apply};
use knows_booking_domain::{AddOnId, Catalog, DomainError, WizardStep};

fn state_with_contact(catalog: &Catalog) -> WizardState {
    let state: WizardState = state_at_details(catalog);
    apply_ok(
        catalog,
        &state,
        Command::EnterDetails {
            contact: complete_contact(),
        },
    )
}

fn complete(catalog: &Catalog, state: &WizardState) -> TransitionResult {
    apply(
        catalog,
        state,
        Command::Continue,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap()
}

#[test]
fn test_completion_produces_booking_record() {
    let catalog: Catalog = create_test_catalog();
    let state: WizardState = state_with_contact(&catalog);

    let result: TransitionResult = complete(&catalog, &state);

    assert_eq!(result.new_state.current_step, WizardStep::Completed);
    let booking: BookingRecord = result.booking.unwrap();
    assert_eq!(booking.package_name, "Full Day Session");
    assert_eq!(booking.date, date(2026, 7, 10));
    assert_eq!(booking.time_slot, "10:00 AM");
    assert_eq!(booking.total, 450);
    assert_eq!(booking.deposit, 135);
    assert_eq!(booking.contact.name, "Amara Knows");
    assert_eq!(result.audit_event.action.name, "CompleteBooking");
}

#[test]
fn test_completion_prices_selected_add_ons() {
    let catalog: Catalog = create_test_catalog();
    let state: WizardState = state_at_details(&catalog);
    let state: WizardState = apply_ok(&catalog, &state, Command::Back);
    let state: WizardState = apply_ok(
        &catalog,
        &state,
        Command::ToggleAddOn {
            add_on_id: AddOnId::new("premium-lighting"),
        },
    );
    let state: WizardState = apply_ok(
        &catalog,
        &state,
        Command::ToggleAddOn {
            add_on_id: AddOnId::new("studio-assistant"),
        },
    );
    let state: WizardState = apply_ok(&catalog, &state, Command::Continue);
    let state: WizardState = apply_ok(
        &catalog,
        &state,
        Command::EnterDetails {
            contact: complete_contact(),
        },
    );

    let result: TransitionResult = complete(&catalog, &state);
    let booking: BookingRecord = result.booking.unwrap();

    assert_eq!(booking.total, 625);
    assert_eq!(booking.deposit, 188);
    let names: Vec<&str> = booking.add_ons.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Premium Lighting Kit", "Studio Assistant"]);
}

#[test]
fn test_completion_requires_contact_details() {
    let catalog: Catalog = create_test_catalog();
    let state: WizardState = state_at_details(&catalog);

    let result = apply(
        &catalog,
        &state,
        Command::Continue,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidName(_))
    ));
    assert_eq!(state.current_step, WizardStep::EnterDetails);
}

#[test]
fn test_confirmation_number_shape_and_freshness() {
    let catalog: Catalog = create_test_catalog();
    let state: WizardState = state_with_contact(&catalog);

    let first: BookingRecord = complete(&catalog, &state).booking.unwrap();
    let second: BookingRecord = complete(&catalog, &state).booking.unwrap();

    let value: &str = first.confirmation_number.value();
    let parts: Vec<&str> = value.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "KS");
    assert_eq!(parts[2].len(), 5);

    // Generated fresh per completion; identical timestamps still draw new
    // suffixes, so a collision here is vanishingly unlikely, not impossible.
    assert_ne!(
        first.confirmation_number.value(),
        second.confirmation_number.value()
    );
}

#[test]
fn test_continue_from_completed_fails() {
    let catalog: Catalog = create_test_catalog();
    let state: WizardState = state_with_contact(&catalog);
    let completed: WizardState = complete(&catalog, &state).new_state;

    let result = apply(
        &catalog,
        &completed,
        Command::Continue,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidStepTransition { .. })
    ));
}

#[test]
fn test_back_from_completed_fails() {
    let catalog: Catalog = create_test_catalog();
    let state: WizardState = state_with_contact(&catalog);
    let completed: WizardState = complete(&catalog, &state).new_state;

    let result = apply(
        &catalog,
        &completed,
        Command::Back,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidStepTransition { .. })
    ));
}

#[test]
fn test_booked_at_matches_supplied_instant() {
    let catalog: Catalog = create_test_catalog();
    let state: WizardState = state_with_contact(&catalog);

    let booking: BookingRecord = complete(&catalog, &state).booking.unwrap();

    assert_eq!(booking.booked_at, test_now());
}
