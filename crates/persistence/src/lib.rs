// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Knows Studios booking engine.
//!
//! This crate stores two things:
//!
//! - **Wizard drafts** — the auto-saved in-progress selection, one row
//!   under a single fixed key, overwritten on every save. A draft is
//!   rehydrated only while its capture timestamp is within the freshness
//!   window; stale or malformed drafts are ignored (never an error) and
//!   the wizard falls back to defaults.
//! - **Audit events** — one row per successful wizard transition.
//!
//! ## Backend
//!
//! `SQLite` via Diesel with embedded migrations. In-memory databases (one
//! per adapter, named by an atomic counter so tests are isolated without
//! time-based collisions) serve tests and the server's default mode; file
//! databases get WAL journaling.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::{DateTime, Duration, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;
use knows_booking::WizardState;
use knows_booking_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

mod backend;
mod data_models;
mod diesel_schema;
mod error;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use data_models::{AuditEventRow, DraftRow, NewAuditEventRow};

/// The fixed storage key for the auto-saved wizard draft.
///
/// A single key means concurrent writers silently overwrite each other
/// (last write wins); one wizard instance per store is the expected use.
pub const DRAFT_KEY: &str = "knows-booking-wizard-draft";

/// How long a saved draft stays eligible for rehydration.
pub const DRAFT_MAX_AGE_HOURS: i64 = 24;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// tests are isolated without time-based collisions.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for wizard drafts and audit events.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a persistence adapter backed by an in-memory `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_booking_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter backed by a file `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Wizard drafts
    // ========================================================================

    /// Saves a snapshot of the wizard state under the fixed draft key,
    /// overwriting any previous snapshot.
    ///
    /// # Arguments
    ///
    /// * `state` - The wizard state to snapshot
    /// * `saved_at` - The capture timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_draft(
        &mut self,
        state: &WizardState,
        saved_at: DateTime<Utc>,
    ) -> Result<(), PersistenceError> {
        let row: DraftRow = DraftRow {
            draft_key: DRAFT_KEY.to_string(),
            state_json: serde_json::to_string(state)?,
            saved_at: saved_at.to_rfc3339(),
        };

        diesel::replace_into(diesel_schema::wizard_drafts::table)
            .values(&row)
            .execute(&mut self.conn)?;

        debug!(saved_at = %row.saved_at, "Wizard draft saved");
        Ok(())
    }

    /// Loads the saved draft, if one exists and is still fresh.
    ///
    /// Returns `Ok(None)` when there is no draft, the draft is older than
    /// [`DRAFT_MAX_AGE_HOURS`], or the stored payload cannot be decoded.
    /// Malformed payloads are logged and ignored rather than surfaced;
    /// the caller always gets a usable answer.
    ///
    /// # Arguments
    ///
    /// * `now` - The current instant for the freshness comparison
    ///
    /// # Errors
    ///
    /// Returns an error only if the read itself fails.
    pub fn load_draft(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<Option<WizardState>, PersistenceError> {
        let row: Option<DraftRow> = diesel_schema::wizard_drafts::table
            .filter(diesel_schema::wizard_drafts::draft_key.eq(DRAFT_KEY))
            .first::<DraftRow>(&mut self.conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let saved_at: DateTime<Utc> = match DateTime::parse_from_rfc3339(&row.saved_at) {
            Ok(t) => t.with_timezone(&Utc),
            Err(e) => {
                warn!(error = %e, "Ignoring draft with unreadable timestamp");
                return Ok(None);
            }
        };

        if now - saved_at > Duration::hours(DRAFT_MAX_AGE_HOURS) {
            debug!(saved_at = %row.saved_at, "Ignoring stale draft");
            return Ok(None);
        }

        match serde_json::from_str::<WizardState>(&row.state_json) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                warn!(error = %e, "Ignoring malformed draft payload");
                Ok(None)
            }
        }
    }

    /// Removes the saved draft, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear_draft(&mut self) -> Result<(), PersistenceError> {
        diesel::delete(
            diesel_schema::wizard_drafts::table
                .filter(diesel_schema::wizard_drafts::draft_key.eq(DRAFT_KEY)),
        )
        .execute(&mut self.conn)?;
        Ok(())
    }

    // ========================================================================
    // Audit events
    // ========================================================================

    /// Persists an audit event.
    ///
    /// # Arguments
    ///
    /// * `event` - The audit event to persist
    /// * `created_at` - The insertion timestamp
    ///
    /// # Returns
    ///
    /// The event ID assigned to the persisted audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn persist_audit_event(
        &mut self,
        event: &AuditEvent,
        created_at: DateTime<Utc>,
    ) -> Result<i64, PersistenceError> {
        let row: NewAuditEventRow = NewAuditEventRow {
            actor_json: serde_json::to_string(&event.actor)?,
            cause_json: serde_json::to_string(&event.cause)?,
            action_json: serde_json::to_string(&event.action)?,
            before_snapshot_json: serde_json::to_string(&event.before)?,
            after_snapshot_json: serde_json::to_string(&event.after)?,
            created_at: created_at.to_rfc3339(),
        };

        diesel::insert_into(diesel_schema::audit_events::table)
            .values(&row)
            .execute(&mut self.conn)?;

        backend::get_last_insert_rowid(&mut self.conn)
    }

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not found or cannot be decoded.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        let row: AuditEventRow = diesel_schema::audit_events::table
            .filter(diesel_schema::audit_events::event_id.eq(event_id))
            .first::<AuditEventRow>(&mut self.conn)?;

        decode_audit_event(&row)
    }

    /// Retrieves the full audit timeline in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if events cannot be retrieved or decoded.
    pub fn get_audit_timeline(&mut self) -> Result<Vec<AuditEvent>, PersistenceError> {
        let rows: Vec<AuditEventRow> = diesel_schema::audit_events::table
            .order(diesel_schema::audit_events::event_id.asc())
            .load::<AuditEventRow>(&mut self.conn)?;

        rows.iter().map(decode_audit_event).collect()
    }

    /// Counts the persisted audit events.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    pub fn count_audit_events(&mut self) -> Result<i64, PersistenceError> {
        diesel_schema::audit_events::table
            .count()
            .get_result::<i64>(&mut self.conn)
            .map_err(Into::into)
    }
}

/// Decodes a stored row back into an audit event.
fn decode_audit_event(row: &AuditEventRow) -> Result<AuditEvent, PersistenceError> {
    let actor: Actor = serde_json::from_str(&row.actor_json)?;
    let cause: Cause = serde_json::from_str(&row.cause_json)?;
    let action: Action = serde_json::from_str(&row.action_json)?;
    let before: StateSnapshot = serde_json::from_str(&row.before_snapshot_json)?;
    let after: StateSnapshot = serde_json::from_str(&row.after_snapshot_json)?;

    Ok(AuditEvent::new(actor, cause, action, before, after))
}
