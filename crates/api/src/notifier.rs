// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The user-facing notice seam.
//!
//! Handlers emit transient notices through this trait instead of talking
//! to a concrete notification system: exactly one `error` notice per
//! blocked transition, one `success` notice per completed booking.
//! Notices are fire-and-forget; no return value is consumed.

use tracing::{info, warn};

/// Sink for transient user-facing notices.
pub trait Notifier {
    /// Reports a success notice.
    fn success(&self, message: &str);

    /// Reports an error notice.
    fn error(&self, message: &str);
}

/// A notifier that forwards notices to the tracing subscriber.
///
/// The server uses this; a UI integration would substitute its own toast
/// implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notice = "success", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(notice = "error", "{message}");
    }
}
