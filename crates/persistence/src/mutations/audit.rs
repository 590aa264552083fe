// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use workload_audit::AuditEvent;

use crate::data_models::NewAuditEventRow;
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;

/// Appends an audit event.
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if persistence or serialization fails.
pub fn persist_audit_event(
    conn: &mut SqliteConnection,
    event: &AuditEvent,
) -> Result<i64, PersistenceError> {
    let week: Option<i32> = event
        .week
        .map(|w| {
            i32::try_from(w.value()).map_err(|_| {
                PersistenceError::SerializationError(format!(
                    "Week {w} does not fit the week column"
                ))
            })
        })
        .transpose()?;
    let created_at: String = now_rfc3339()?;

    let row: NewAuditEventRow<'_> = NewAuditEventRow {
        action_name: &event.action.name,
        week,
        actor_json: serde_json::to_string(&event.actor)?,
        cause_json: serde_json::to_string(&event.cause)?,
        action_json: serde_json::to_string(&event.action)?,
        before_json: serde_json::to_string(&event.before)?,
        after_json: serde_json::to_string(&event.after)?,
        created_at: &created_at,
    };

    let event_id: i64 = diesel::insert_into(audit_events::table)
        .values(&row)
        .returning(audit_events::event_id)
        .get_result(conn)?;

    debug!(event_id, action = %event.action.name, "Appended audit event");
    Ok(event_id)
}
