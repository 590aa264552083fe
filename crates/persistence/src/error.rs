// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    DatabaseError(String),
    /// Database connection failed.
    #[error("Database connection failed: {0}")]
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// The requested event was not found.
    #[error("Event not found: {0}")]
    EventNotFound(i64),
    /// A stored row could not be turned back into domain values.
    #[error("State reconstruction error: {0}")]
    ReconstructionError(String),
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Initialization error.
    #[error("Initialization error: {0}")]
    InitializationError(String),
    /// A timestamp could not be produced.
    #[error("Timestamp error: {0}")]
    TimestampError(String),
    /// The requested resource was not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<time::error::Format> for PersistenceError {
    fn from(err: time::error::Format) -> Self {
        Self::TimestampError(err.to_string())
    }
}
