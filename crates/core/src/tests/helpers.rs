// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, TransitionResult, WizardState, apply};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use knows_booking_audit::{Actor, Cause};
use knows_booking_domain::{Catalog, ContactDetails, PackageId};

pub fn create_test_catalog() -> Catalog {
    Catalog::standard().with_blocked_dates(vec![date(2026, 7, 4), date(2026, 12, 25)])
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("wizard_1748_9"), String::from("visitor"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-204"), String::from("User input"))
}

/// A fixed "now" of 2026-06-15 10:30:00 UTC for deterministic transitions.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 10, 30, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn complete_contact() -> ContactDetails {
    ContactDetails::new(
        "Amara Knows",
        "amara@example.com",
        "555-0114",
        "Lookbook shoot",
    )
}

/// Applies a command that is expected to succeed and returns the new state.
pub fn apply_ok(catalog: &Catalog, state: &WizardState, command: Command) -> WizardState {
    let result: TransitionResult = apply(
        catalog,
        state,
        command,
        create_test_actor(),
        create_test_cause(),
        test_now(),
    )
    .unwrap();
    result.new_state
}

/// Walks a fresh wizard to the `EnterDetails` step with a valid selection.
pub fn state_at_details(catalog: &Catalog) -> WizardState {
    let state: WizardState = WizardState::fresh(catalog);
    let state: WizardState = apply_ok(
        catalog,
        &state,
        Command::SelectPackage {
            package_id: PackageId::new("full-day"),
        },
    );
    let state: WizardState = apply_ok(catalog, &state, Command::Continue);
    let state: WizardState = apply_ok(
        catalog,
        &state,
        Command::SelectDate {
            date: date(2026, 7, 10),
        },
    );
    let state: WizardState = apply_ok(
        catalog,
        &state,
        Command::SelectTimeSlot {
            label: String::from("10:00 AM"),
        },
    );
    let state: WizardState = apply_ok(catalog, &state, Command::Continue);
    apply_ok(catalog, &state, Command::Continue)
}
