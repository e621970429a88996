// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types mapping between Diesel tables and domain types.

use diesel::prelude::*;

/// A stored wizard draft row.
///
/// The single fixed draft key means a save always overwrites the previous
/// snapshot; `saved_at` carries the capture timestamp (RFC 3339) used by
/// the freshness check.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::diesel_schema::wizard_drafts)]
pub struct DraftRow {
    /// The fixed draft key.
    pub draft_key: String,
    /// The serialized wizard state.
    pub state_json: String,
    /// The capture timestamp (RFC 3339).
    pub saved_at: String,
}

/// A stored audit event row.
#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::diesel_schema::audit_events)]
pub struct AuditEventRow {
    /// The assigned event id.
    pub event_id: i64,
    /// The actor, serialized as JSON.
    pub actor_json: String,
    /// The cause, serialized as JSON.
    pub cause_json: String,
    /// The action, serialized as JSON.
    pub action_json: String,
    /// The before snapshot, serialized as JSON.
    pub before_snapshot_json: String,
    /// The after snapshot, serialized as JSON.
    pub after_snapshot_json: String,
    /// The insertion timestamp (RFC 3339).
    pub created_at: String,
}

/// An audit event row ready for insertion (no id yet).
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::diesel_schema::audit_events)]
pub struct NewAuditEventRow {
    /// The actor, serialized as JSON.
    pub actor_json: String,
    /// The cause, serialized as JSON.
    pub cause_json: String,
    /// The action, serialized as JSON.
    pub action_json: String,
    /// The before snapshot, serialized as JSON.
    pub before_snapshot_json: String,
    /// The after snapshot, serialized as JSON.
    pub after_snapshot_json: String,
    /// The insertion timestamp (RFC 3339).
    pub created_at: String,
}
