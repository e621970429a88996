// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::notifier::Notifier;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use knows_booking_audit::Cause;
use knows_booking_domain::Catalog;
use knows_booking_persistence::Persistence;
use std::sync::Mutex;

pub const TEST_SESSION: &str = "wizard_1748_9";

pub fn create_test_catalog() -> Catalog {
    Catalog::standard().with_blocked_dates(vec![date(2026, 7, 4)])
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-204"), String::from("User input"))
}

/// A fixed "now" of 2026-06-15 10:30:00 UTC for deterministic handlers.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 10, 30, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A notifier that records every notice for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn success_count(&self) -> usize {
        self.successes.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
