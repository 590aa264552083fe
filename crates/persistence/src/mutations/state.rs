// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use workload::State;

use crate::data_models::{STATE_BLOB_KEY, StateBlobRow};
use crate::diesel_schema::state_blobs;
use crate::error::PersistenceError;
use crate::mutations::now_rfc3339;

/// Replaces the stored state blob with `state`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_state(conn: &mut SqliteConnection, state: &State) -> Result<(), PersistenceError> {
    let updated_at: String = now_rfc3339()?;
    let row: StateBlobRow<'_> = StateBlobRow {
        blob_key: STATE_BLOB_KEY,
        state_json: serde_json::to_string(state)?,
        updated_at: &updated_at,
    };

    diesel::insert_into(state_blobs::table)
        .values(&row)
        .on_conflict(state_blobs::blob_key)
        .do_update()
        .set(&row)
        .execute(conn)?;

    debug!(
        teachers = state.teachers.len(),
        bytes = row.state_json.len(),
        "Saved state blob"
    );
    Ok(())
}
