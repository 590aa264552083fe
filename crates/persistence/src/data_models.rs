// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use workload_audit::AuditEvent;

use crate::diesel_schema::{audit_events, state_blobs};

/// Key under which the single state blob is stored.
pub const STATE_BLOB_KEY: &str = "state";

/// Row of `audit_events` as read back from the database.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = audit_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AuditEventRow {
    pub event_id: i64,
    pub action_name: String,
    pub week: Option<i32>,
    pub actor_json: String,
    pub cause_json: String,
    pub action_json: String,
    pub before_json: String,
    pub after_json: String,
    pub created_at: String,
}

/// Insertable form of an audit event.
#[derive(Debug, Insertable)]
#[diesel(table_name = audit_events)]
pub struct NewAuditEventRow<'a> {
    pub action_name: &'a str,
    pub week: Option<i32>,
    pub actor_json: String,
    pub cause_json: String,
    pub action_json: String,
    pub before_json: String,
    pub after_json: String,
    pub created_at: &'a str,
}

/// Insertable form of the state blob.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = state_blobs)]
pub struct StateBlobRow<'a> {
    pub blob_key: &'a str,
    pub state_json: String,
    pub updated_at: &'a str,
}

/// An audit event together with its storage metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAuditEvent {
    /// Database-assigned id, increasing with insertion order.
    pub event_id: i64,
    /// RFC 3339 UTC timestamp of insertion.
    pub created_at: String,
    /// The event itself.
    pub event: AuditEvent,
}
