// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{add_teacher, create_test_persistence, set_actual, week};
use crate::{Persistence, PersistenceError, StoredAuditEvent};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use workload::{State, TransitionResult};

#[test]
fn test_persist_transition_stores_state_and_event() {
    let mut persistence: Persistence = create_test_persistence();
    let result: TransitionResult = add_teacher(&State::with_defaults(), "A", "Nguyễn Văn A");

    let event_id: i64 = persistence.persist_transition(&result).unwrap();

    assert_eq!(persistence.load_state().unwrap(), Some(result.new_state));
    let stored: StoredAuditEvent = persistence.get_audit_event(event_id).unwrap();
    assert_eq!(stored.event, result.audit_event);
    assert!(OffsetDateTime::parse(&stored.created_at, &Rfc3339).is_ok());
}

#[test]
fn test_event_ids_increase() {
    let mut persistence: Persistence = create_test_persistence();
    let first: TransitionResult = add_teacher(&State::with_defaults(), "A", "Nguyễn Văn A");
    let second: TransitionResult = add_teacher(&first.new_state, "B", "Trần Thị B");

    let first_id: i64 = persistence.persist_transition(&first).unwrap();
    let second_id: i64 = persistence.persist_transition(&second).unwrap();

    assert!(second_id > first_id);
    assert_eq!(persistence.count_audit_events().unwrap(), 2);
}

#[test]
fn test_list_audit_events_newest_first_with_limit() {
    let mut persistence: Persistence = create_test_persistence();
    let mut state: State = State::with_defaults();
    for (id, name) in [
        ("A", "Nguyễn Văn A"),
        ("B", "Trần Thị B"),
        ("C", "Lê Văn C"),
    ] {
        let result: TransitionResult = add_teacher(&state, id, name);
        persistence.persist_transition(&result).unwrap();
        state = result.new_state;
    }

    let events: Vec<StoredAuditEvent> = persistence.list_audit_events(2).unwrap();

    assert_eq!(events.len(), 2);
    assert!(events[0].event_id > events[1].event_id);
    assert!(
        events[0]
            .event
            .action
            .details
            .as_ref()
            .unwrap()
            .contains("Lê Văn C")
    );
}

#[test]
fn test_week_is_recorded_for_weekly_commands() {
    let mut persistence: Persistence = create_test_persistence();
    let added: TransitionResult = add_teacher(&State::with_defaults(), "A", "Nguyễn Văn A");
    let recorded: TransitionResult = set_actual(&added.new_state, 3, "A", 15.0);
    persistence.persist_transition(&added).unwrap();
    persistence.persist_transition(&recorded).unwrap();

    let week_three: Vec<StoredAuditEvent> =
        persistence.list_audit_events_for_week(week(3)).unwrap();
    let week_four: Vec<StoredAuditEvent> = persistence.list_audit_events_for_week(week(4)).unwrap();

    assert_eq!(week_three.len(), 1);
    assert_eq!(week_three[0].event.action.name, "SetActual");
    assert_eq!(week_three[0].event.week, Some(week(3)));
    assert!(week_four.is_empty());
}

#[test]
fn test_missing_event_is_reported() {
    let mut persistence: Persistence = create_test_persistence();

    let result = persistence.get_audit_event(42);

    assert_eq!(result.unwrap_err(), PersistenceError::EventNotFound(42));
}
