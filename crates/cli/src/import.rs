// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV import of the teacher directory.
//!
//! Rows are validated against the current state without mutating it. The
//! caller applies the resulting `AddTeacher` commands one by one.

use csv::StringRecord;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use workload::{Command, State};
use workload_domain::{RoleId, TeacherId, resolve_role_names};

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["id", "name"];

/// Separator between role names inside the `roles` column.
const ROLE_SEPARATOR: char = '|';

/// CSV input that cannot be read at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// Headers are missing or the file is not valid CSV.
    #[error("Invalid CSV format: {reason}")]
    InvalidCsvFormat {
        /// What went wrong.
        reason: String,
    },
}

/// Status of one CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Row can be imported.
    Valid,
    /// Row has errors and is skipped.
    Invalid,
}

/// Validation result for one CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRow {
    /// 1-based row number, excluding the header.
    pub row_number: usize,
    /// Teacher id as written.
    pub id: String,
    /// Display name as written.
    pub name: String,
    /// Roles that resolved to known roles.
    pub role_ids: Vec<RoleId>,
    /// Role names with no matching role; they are dropped.
    pub unknown_roles: Vec<String>,
    /// Row status.
    pub status: RowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

impl ImportRow {
    /// Builds the command that imports this row, if it is valid.
    #[must_use]
    pub fn command(&self) -> Option<Command> {
        (self.status == RowStatus::Valid).then(|| Command::AddTeacher {
            id: TeacherId::new(&self.id),
            name: self.name.clone(),
            role_ids: self.role_ids.clone(),
        })
    }
}

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ImportError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ImportError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Validates CSV teacher rows against the current state.
///
/// Role names are matched case-insensitively; unknown names are reported
/// but do not invalidate the row. A row is invalid when its id or name is
/// blank, or its id already exists in the state or earlier in the file.
///
/// # Errors
///
/// Returns an error if the headers are missing or a record cannot be read.
pub fn preview_teacher_import(
    csv_content: &str,
    state: &State,
) -> Result<Vec<ImportRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ImportError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut seen_ids: HashSet<TeacherId> = HashSet::new();
    let mut rows: Vec<ImportRow> = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record: StringRecord = record.map_err(|e| ImportError::InvalidCsvFormat {
            reason: format!("Failed to read row {}: {e}", idx + 1),
        })?;
        let get_field = |name: &str| -> String {
            header_map
                .get(name)
                .and_then(|&i| record.get(i))
                .unwrap_or_default()
                .trim()
                .to_string()
        };

        let id: String = get_field("id");
        let name: String = get_field("name");
        let role_names: Vec<String> = get_field("roles")
            .split(ROLE_SEPARATOR)
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(String::from)
            .collect();

        let mut errors: Vec<String> = Vec::new();
        if id.is_empty() {
            errors.push(String::from("id: required field is missing or empty"));
        }
        if name.is_empty() {
            errors.push(String::from("name: required field is missing or empty"));
        }
        let teacher_id: TeacherId = TeacherId::new(&id);
        if !id.is_empty() {
            if state.teacher(&teacher_id).is_some() {
                errors.push(format!("id: teacher '{id}' already exists"));
            } else if !seen_ids.insert(teacher_id) {
                errors.push(format!("id: duplicate within CSV - '{id}' appears multiple times"));
            }
        }

        let role_ids: Vec<RoleId> = resolve_role_names(&role_names, &state.roles);
        let unknown_roles: Vec<String> = role_names
            .into_iter()
            .filter(|r| state.role_by_name(r).is_none())
            .collect();

        rows.push(ImportRow {
            row_number: idx + 1,
            id,
            name,
            role_ids,
            unknown_roles,
            status: if errors.is_empty() {
                RowStatus::Valid
            } else {
                RowStatus::Invalid
            },
            errors,
        });
    }

    Ok(rows)
}
