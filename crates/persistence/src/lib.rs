// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the teaching workload engine.
//!
//! The whole engine state is stored as a single JSON blob; every applied
//! command additionally appends one row to the audit trail. Both are written
//! in the same transaction by [`Persistence::persist_transition`].
//!
//! ## Backend
//!
//! `SQLite` only, through Diesel. Schema migrations are embedded in the
//! binary and run on every open, so a fresh file or in-memory database is
//! ready to use immediately. File databases run in WAL mode.
//!
//! ## Testing
//!
//! Tests run against isolated shared-cache in-memory databases created by
//! [`Persistence::new_in_memory`]; no external infrastructure is needed.

#![deny(
    clippy::pedantic,
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

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;
use workload::{State, TransitionResult};
use workload_domain::WeekNumber;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::StoredAuditEvent;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the state blob and the audit trail.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:workload_memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
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

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // State
    // ========================================================================

    /// Loads the stored state, or `None` if nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored blob is corrupt.
    pub fn load_state(&mut self) -> Result<Option<State>, PersistenceError> {
        queries::state::load_state(&mut self.conn)
    }

    /// Loads the stored state, falling back to `State::with_defaults()`
    /// when nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored blob is corrupt.
    pub fn load_state_or_default(&mut self) -> Result<State, PersistenceError> {
        let state: Option<State> = self.load_state()?;
        if state.is_none() {
            warn!("No stored state found, starting from defaults");
        }
        Ok(state.unwrap_or_default())
    }

    /// Replaces the stored state without recording an audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_state(&mut self, state: &State) -> Result<(), PersistenceError> {
        mutations::save_state(&mut self.conn, state)
    }

    // ========================================================================
    // Transitions & Audit
    // ========================================================================

    /// Persists a transition result: the new state and its audit event,
    /// atomically.
    ///
    /// # Returns
    ///
    /// The event ID assigned to the audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; nothing is written in that case.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        mutations::persist_transition(&mut self.conn, result)
    }

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not found or cannot be deserialized.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<StoredAuditEvent, PersistenceError> {
        queries::audit::get_audit_event(&mut self.conn, event_id)
    }

    /// Lists up to `limit` of the most recent audit events, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be deserialized.
    pub fn list_audit_events(
        &mut self,
        limit: i64,
    ) -> Result<Vec<StoredAuditEvent>, PersistenceError> {
        queries::audit::list_audit_events(&mut self.conn, limit)
    }

    /// Lists the audit events recorded for one week, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be deserialized.
    pub fn list_audit_events_for_week(
        &mut self,
        week: WeekNumber,
    ) -> Result<Vec<StoredAuditEvent>, PersistenceError> {
        queries::audit::list_audit_events_for_week(&mut self.conn, week)
    }

    /// Counts all audit events.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_audit_events(&mut self) -> Result<i64, PersistenceError> {
        queries::audit::count_audit_events(&mut self.conn)
    }
}
