// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory wizard sessions for the server.
//!
//! Each visitor gets a session token and a server-held `WizardState`;
//! HTTP handlers look the session up, run the API handler against it, and
//! store the state it returns. A completed session additionally retains
//! the booking record (for the confirmation document) and the abort
//! handle of the scheduled follow-up so an early close cancels it.

use knows_booking::{BookingRecord, WizardState};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::task::AbortHandle;
use tracing::debug;

/// A single visitor's wizard session.
#[derive(Debug)]
pub struct WizardSession {
    /// The wizard state after the last successful transition.
    pub state: WizardState,
    /// The booking record, once the wizard completes.
    pub booking: Option<BookingRecord>,
    /// The scheduled follow-up redirect, if one is pending.
    pub follow_up: Option<AbortHandle>,
}

impl WizardSession {
    /// Aborts a pending follow-up, if any.
    pub fn cancel_follow_up(&mut self) {
        if let Some(handle) = self.follow_up.take() {
            handle.abort();
            debug!("Pending follow-up aborted");
        }
    }
}

/// The registry of live wizard sessions, keyed by session token.
///
/// Tokens are generated server-side; one wizard instance per token is the
/// expected use, and the shared draft key underneath is last-write-wins.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, WizardSession>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Creates a session holding the given state and returns its token.
    pub fn create(&mut self, state: WizardState) -> String {
        let token: String = generate_session_token();
        self.sessions.insert(
            token.clone(),
            WizardSession {
                state,
                booking: None,
                follow_up: None,
            },
        );
        token
    }

    /// Looks up a session by token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&WizardSession> {
        self.sessions.get(token)
    }

    /// Looks up a session by token for mutation.
    #[must_use]
    pub fn get_mut(&mut self, token: &str) -> Option<&mut WizardSession> {
        self.sessions.get_mut(token)
    }

    /// Removes a session, aborting any pending follow-up.
    pub fn close(&mut self, token: &str) -> bool {
        match self.sessions.remove(token) {
            Some(mut session) => {
                session.cancel_follow_up();
                true
            }
            None => false,
        }
    }
}

/// Generates a session token from a timestamp and a random draw.
///
/// Tokens identify a browser session for the duration of the funnel; they
/// carry no authentication weight.
fn generate_session_token() -> String {
    let timestamp: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    format!("wizard_{timestamp}_{}", rand::random::<u64>())
}
