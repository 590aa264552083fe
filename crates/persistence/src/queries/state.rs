// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use workload::State;

use crate::data_models::STATE_BLOB_KEY;
use crate::diesel_schema::state_blobs;
use crate::error::PersistenceError;

/// Loads the stored state blob.
///
/// Returns `None` when nothing has been saved or the stored blob is blank.
///
/// # Errors
///
/// Returns an error if the query fails or the blob cannot be deserialized.
pub fn load_state(conn: &mut SqliteConnection) -> Result<Option<State>, PersistenceError> {
    let stored: Option<String> = state_blobs::table
        .filter(state_blobs::blob_key.eq(STATE_BLOB_KEY))
        .select(state_blobs::state_json)
        .first::<String>(conn)
        .optional()?;

    match stored {
        Some(json) if !json.trim().is_empty() => {
            let state: State = serde_json::from_str(&json)?;
            debug!(teachers = state.teachers.len(), "Loaded state blob");
            Ok(Some(state))
        }
        _ => Ok(None),
    }
}
