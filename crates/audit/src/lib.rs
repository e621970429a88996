// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a wizard transition.
/// For the public funnel this is the visitor's wizard session; scheduled
/// work (e.g. the follow-up redirect) acts as "system".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "visitor", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
///
/// A cause describes why a wizard transition was initiated, typically the
/// HTTP request that carried the user's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
///
/// An action describes what wizard transition occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`SelectPackage`", "`CompleteBooking`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A snapshot of wizard state at a point in time.
///
/// Snapshots are compact key=value summaries, enough to read a timeline
/// without replaying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing a wizard transition.
///
/// Every successful transition must produce exactly one audit event.
/// Audit events are immutable once created and capture:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The state before the transition (before)
/// - The state after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who initiated this transition.
    pub actor: Actor,
    /// The cause or reason for this transition.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the transition
    /// * `cause` - The reason for the transition
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("wizard_17_42"), String::from("visitor"));

        assert_eq!(actor.id, "wizard_17_42");
        assert_eq!(actor.actor_type, "visitor");
    }

    #[test]
    fn test_cause_creation_requires_all_fields() {
        let cause: Cause = Cause::new(String::from("req-851"), String::from("Continue pressed"));

        assert_eq!(cause.id, "req-851");
        assert_eq!(cause.description, "Continue pressed");
    }

    #[test]
    fn test_action_creation_with_and_without_details() {
        let bare: Action = Action::new(String::from("StepBack"), None);
        assert_eq!(bare.name, "StepBack");
        assert_eq!(bare.details, None);

        let detailed: Action = Action::new(
            String::from("SelectPackage"),
            Some(String::from("Selected package 'full-day'")),
        );
        assert_eq!(detailed.details.as_deref(), Some("Selected package 'full-day'"));
    }

    #[test]
    fn test_audit_event_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("wizard_17_42"), String::from("visitor"));
        let cause: Cause = Cause::new(String::from("req-851"), String::from("Continue pressed"));
        let action: Action = Action::new(String::from("AdvanceStep"), None);
        let before: StateSnapshot = StateSnapshot::new(String::from("step=SelectPackage"));
        let after: StateSnapshot = StateSnapshot::new(String::from("step=SelectDateTime"));

        let event: AuditEvent = AuditEvent::new(
            actor.clone(),
            cause.clone(),
            action.clone(),
            before.clone(),
            after.clone(),
        );

        assert_eq!(event.actor, actor);
        assert_eq!(event.cause, cause);
        assert_eq!(event.action, action);
        assert_eq!(event.before, before);
        assert_eq!(event.after, after);
    }

    #[test]
    fn test_audit_event_equality() {
        let make = || {
            AuditEvent::new(
                Actor::new(String::from("wizard_17_42"), String::from("visitor")),
                Cause::new(String::from("req-851"), String::from("Continue pressed")),
                Action::new(String::from("AdvanceStep"), None),
                StateSnapshot::new(String::from("step=SelectPackage")),
                StateSnapshot::new(String::from("step=SelectDateTime")),
            )
        };
        assert_eq!(make(), make());
    }
}
