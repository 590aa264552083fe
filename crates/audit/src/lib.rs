// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use workload_domain::WeekNumber;

/// Represents the entity performing an action.
///
/// An actor is whoever edits the workload data: a staff member at the
/// front office, an import job, or the CLI on their behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "staff", "import", "system").
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
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, CLI invocation).
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
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`SetAssignment`", "`CopySelected`").
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

/// A compact summary of the state at a point in time.
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

/// An immutable audit event representing a state transition.
///
/// Every successful state change produces exactly one audit event
/// capturing who acted (actor), why (cause), what was done (action),
/// the state before and after, and the week it concerns, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// The teaching week the change applies to. `None` for settings,
    /// teachers, roles and subjects.
    pub week: Option<WeekNumber>,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    /// * `week` - The week the change applies to, if any
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        week: Option<WeekNumber>,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            week,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn create_test_event(week: Option<WeekNumber>) -> AuditEvent {
        AuditEvent::new(
            Actor::new(String::from("staff-1"), String::from("staff")),
            Cause::new(String::from("cli-1"), String::from("Weekly entry")),
            Action::new(String::from("SetAssignment"), None),
            StateSnapshot::new(String::from("before-state")),
            StateSnapshot::new(String::from("after-state")),
            week,
        )
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("staff-1"), String::from("staff"));

        assert_eq!(actor.id, "staff-1");
        assert_eq!(actor.actor_type, "staff");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("CopySelected"),
            Some(String::from("Copied 2 teachers from week 3 to week 4")),
        );

        assert_eq!(action.name, "CopySelected");
        assert_eq!(
            action.details,
            Some(String::from("Copied 2 teachers from week 3 to week 4"))
        );
    }

    #[test]
    fn test_audit_event_carries_week_scope() {
        let week: WeekNumber = WeekNumber::new(5).unwrap();
        let event: AuditEvent = create_test_event(Some(week));

        assert_eq!(event.week, Some(week));
        assert_eq!(event.action.name, "SetAssignment");
        assert_eq!(event.before.data, "before-state");
        assert_eq!(event.after.data, "after-state");
    }

    #[test]
    fn test_audit_event_equality() {
        assert_eq!(create_test_event(None), create_test_event(None));
        assert_ne!(
            create_test_event(None),
            create_test_event(Some(WeekNumber::FIRST))
        );
    }

    #[test]
    fn test_audit_event_serializes_to_json() {
        let event: AuditEvent = create_test_event(Some(WeekNumber::new(2).unwrap()));

        let json: String = serde_json::to_string(&event).unwrap();
        let back: AuditEvent = serde_json::from_str(&json).unwrap();

        assert!(json.contains("\"week\":2"));
        assert_eq!(back, event);
    }
}
