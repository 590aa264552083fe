// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Detection of overlapping (subject, class) claims within one week.

use crate::assignment::{AssignmentEntry, ParsedAssignment, parse_assignment};
use crate::types::{Teacher, TeacherId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A (subject, class) pair already claimed by another teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The contested class token.
    pub class: String,
    /// The subject as written in the proposed assignment.
    pub subject: String,
    /// The teacher holding the other claim.
    pub teacher_id: TeacherId,
    /// Display name of that teacher.
    pub teacher_name: String,
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Class {} already has {} assigned to {}",
            self.class, self.subject, self.teacher_name
        )
    }
}

/// Reports the claims in `proposed` that collide with other teachers'
/// assignments for the same week.
///
/// This is a pure query over a snapshot and is cheap enough to run on
/// every edit.
///
/// # Arguments
///
/// * `proposed` - The raw assignment string being edited
/// * `current_week` - Stored assignment strings for the week, by teacher
/// * `directory` - All teachers, in display order
/// * `exclude` - Teacher whose stored entry is skipped (usually the editor)
///
/// # Returns
///
/// Conflicts ordered by directory position, then by proposed entry and
/// class order. Nothing is deduplicated: a class listed twice under the
/// same subject yields two conflicts.
#[must_use]
pub fn detect_conflicts(
    proposed: &str,
    current_week: &BTreeMap<TeacherId, String>,
    directory: &[Teacher],
    exclude: Option<&TeacherId>,
) -> Vec<Conflict> {
    let proposed: ParsedAssignment = parse_assignment(proposed);
    if proposed.is_empty() {
        return Vec::new();
    }

    let mut conflicts: Vec<Conflict> = Vec::new();
    for teacher in directory {
        if exclude == Some(&teacher.id) {
            continue;
        }
        let Some(stored) = current_week.get(&teacher.id) else {
            continue;
        };
        let theirs: ParsedAssignment = parse_assignment(stored);

        for entry in &proposed.entries {
            let key: String = entry.subject_key();
            for other in theirs.entries.iter().filter(|o| o.subject_key() == key) {
                collect_overlaps(entry, other, teacher, &mut conflicts);
            }
        }
    }

    conflicts
}

fn collect_overlaps(
    entry: &AssignmentEntry,
    other: &AssignmentEntry,
    teacher: &Teacher,
    conflicts: &mut Vec<Conflict>,
) {
    for class in entry.classes.iter().filter(|c| other.contains_class(c)) {
        conflicts.push(Conflict {
            class: class.clone(),
            subject: entry.subject.clone(),
            teacher_id: teacher.id.clone(),
            teacher_name: teacher.name.clone(),
        });
    }
}
