// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit trail queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use workload_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use workload_domain::WeekNumber;

use crate::data_models::{AuditEventRow, StoredAuditEvent};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;

fn reconstruct(row: AuditEventRow) -> Result<StoredAuditEvent, PersistenceError> {
    let week: Option<WeekNumber> = row
        .week
        .map(|w| {
            u32::try_from(w)
                .ok()
                .and_then(|w| WeekNumber::new(w).ok())
                .ok_or_else(|| {
                    PersistenceError::ReconstructionError(format!(
                        "Event {} has invalid week {w}",
                        row.event_id
                    ))
                })
        })
        .transpose()?;

    let actor: Actor = serde_json::from_str(&row.actor_json)?;
    let cause: Cause = serde_json::from_str(&row.cause_json)?;
    let action: Action = serde_json::from_str(&row.action_json)?;
    let before: StateSnapshot = serde_json::from_str(&row.before_json)?;
    let after: StateSnapshot = serde_json::from_str(&row.after_json)?;

    if action.name != row.action_name {
        return Err(PersistenceError::ReconstructionError(format!(
            "Event {} action name mismatch: column '{}', payload '{}'",
            row.event_id, row.action_name, action.name
        )));
    }

    Ok(StoredAuditEvent {
        event_id: row.event_id,
        created_at: row.created_at,
        event: AuditEvent::new(actor, cause, action, before, after, week),
    })
}

/// Retrieves an audit event by ID.
///
/// # Errors
///
/// Returns `EventNotFound` if no such event exists, or an error if the row
/// cannot be deserialized.
pub fn get_audit_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<StoredAuditEvent, PersistenceError> {
    let row: AuditEventRow = audit_events::table
        .filter(audit_events::event_id.eq(event_id))
        .select(AuditEventRow::as_select())
        .first::<AuditEventRow>(conn)
        .optional()?
        .ok_or(PersistenceError::EventNotFound(event_id))?;

    reconstruct(row)
}

/// Lists up to `limit` of the most recent audit events, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be deserialized.
pub fn list_audit_events(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<StoredAuditEvent>, PersistenceError> {
    audit_events::table
        .order(audit_events::event_id.desc())
        .limit(limit)
        .select(AuditEventRow::as_select())
        .load::<AuditEventRow>(conn)?
        .into_iter()
        .map(reconstruct)
        .collect()
}

/// Lists every audit event recorded for one week, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be deserialized.
pub fn list_audit_events_for_week(
    conn: &mut SqliteConnection,
    week: WeekNumber,
) -> Result<Vec<StoredAuditEvent>, PersistenceError> {
    let week_value: i32 = i32::try_from(week.value()).map_err(|_| {
        PersistenceError::QueryFailed(format!("Week {week} does not fit the week column"))
    })?;

    audit_events::table
        .filter(audit_events::week.eq(week_value))
        .order(audit_events::event_id.asc())
        .select(AuditEventRow::as_select())
        .load::<AuditEventRow>(conn)?
        .into_iter()
        .map(reconstruct)
        .collect()
}

/// Counts all audit events.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_audit_events(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(audit_events::table.count().get_result(conn)?)
}
