// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations.

mod audit;
mod state;

use audit::persist_audit_event;
pub use state::save_state;

use diesel::{Connection, SqliteConnection};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;
use workload::TransitionResult;

use crate::error::PersistenceError;

/// Current UTC time as RFC 3339.
pub fn now_rfc3339() -> Result<String, PersistenceError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}

/// Stores the new state and its audit event in one transaction.
///
/// # Returns
///
/// The event ID assigned to the audit event.
///
/// # Errors
///
/// Returns an error if either write fails; neither is kept in that case.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<i64, PersistenceError> {
    let event_id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        save_state(conn, &result.new_state)?;
        persist_audit_event(conn, &result.audit_event)
    })?;

    info!(
        event_id,
        action = %result.audit_event.action.name,
        "Persisted transition"
    );
    Ok(event_id)
}
