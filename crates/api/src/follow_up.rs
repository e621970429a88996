// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The post-completion external follow-up.
//!
//! Completing a booking schedules one externally visible side effect:
//! opening the studio's third-party booking platform after a short delay,
//! where the deposit is actually collected. The follow-up is data here so
//! the scheduler (the server) owns the timer and can cancel it; tests
//! assert it was produced without waiting for it to fire.

use std::time::Duration;

/// The third-party platform where deposits are collected.
pub const BOOKING_PLATFORM_URL: &str = "https://calendly.com/knowsstudios/session-deposit";

/// How long after completion the platform is opened.
pub const FOLLOW_UP_DELAY: Duration = Duration::from_secs(5);

/// A scheduled external redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    /// The URL to open.
    pub url: String,
    /// How long to wait before opening it.
    pub delay: Duration,
}

impl FollowUp {
    /// The follow-up produced by every completed booking.
    #[must_use]
    pub fn external_booking() -> Self {
        Self {
            url: BOOKING_PLATFORM_URL.to_string(),
            delay: FOLLOW_UP_DELAY,
        }
    }
}
