// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod assignment;
mod class_format;
mod conflict;
pub mod defaults;
mod error;
mod periods;
mod quota;
mod types;
mod weekly;

#[cfg(test)]
mod tests;

pub use assignment::{
    AssignmentEntry, IgnoreReason, IgnoredSegment, ParsedAssignment, normalize_class,
    parse_assignment, subject_key,
};
pub use class_format::{validate_assignment_classes, validate_class_token};
pub use conflict::{Conflict, detect_conflicts};
pub use error::{ClassFormatError, DomainError};
pub use periods::{SubjectPeriodTable, total_periods};
pub use quota::{
    WeekLine, WorkloadBalance, aggregate_all, aggregate_balance, effective_weekly_quota,
    resolve_role_names, total_reduction, unique_role_ids,
};
pub use types::{
    DuplicateClassPolicy, GradeRange, Role, RoleId, Settings, SubjectConfig, Teacher, TeacherId,
    WeekNumber,
};
pub use weekly::{
    CopyOutcome, WeeklyActuals, WeeklyAssignments, WeeklySnapshotStore, WeeklyTable, copy_selected,
    default_copy_source,
};
