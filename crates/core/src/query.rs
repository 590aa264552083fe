// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries over a state snapshot.
//!
//! None of these create audit events or change the state.

use crate::state::{AssignmentFeedback, State};
use std::collections::BTreeMap;
use workload_domain::{
    Conflict, DomainError, ParsedAssignment, SubjectPeriodTable, Teacher, TeacherId, WeekNumber,
    WeeklySnapshotStore, WorkloadBalance, aggregate_all, aggregate_balance, detect_conflicts,
    parse_assignment, validate_assignment_classes,
};

/// Produces advisory feedback for an assignment being edited.
///
/// Cheap enough to call on every keystroke. The teacher's own stored
/// entry for the week is excluded from conflict detection so re-saving an
/// unchanged assignment is clean.
///
/// # Arguments
///
/// * `state` - The current state
/// * `week` - The week being edited
/// * `teacher_id` - The teacher doing the editing
/// * `text` - The proposed assignment string
#[must_use]
pub fn check_assignment(
    state: &State,
    week: WeekNumber,
    teacher_id: &TeacherId,
    text: &str,
) -> AssignmentFeedback {
    let parsed: ParsedAssignment = parse_assignment(text);
    let empty: BTreeMap<TeacherId, String> = BTreeMap::new();
    let current_week: &BTreeMap<TeacherId, String> = state.assignments.week(week).unwrap_or(&empty);

    let conflicts: Vec<Conflict> =
        detect_conflicts(text, current_week, &state.teachers, Some(teacher_id));
    let total_periods: f64 = state
        .period_table()
        .total_parsed(&parsed, state.settings.duplicate_class_policy);

    AssignmentFeedback {
        conflicts,
        format_errors: validate_assignment_classes(&parsed, state.settings.grade_range),
        ignored: parsed.ignored,
        total_periods,
    }
}

/// Lists every conflict stored for a week, teacher by teacher.
///
/// Each overlapping pair is reported from both sides.
#[must_use]
pub fn week_conflicts(state: &State, week: WeekNumber) -> Vec<(TeacherId, Conflict)> {
    let Some(current_week) = state.assignments.week(week) else {
        return Vec::new();
    };

    state
        .teachers
        .iter()
        .filter_map(|teacher| current_week.get(&teacher.id).map(|text| (teacher, text)))
        .flat_map(|(teacher, text)| {
            detect_conflicts(text, current_week, &state.teachers, Some(&teacher.id))
                .into_iter()
                .map(|conflict| (teacher.id.clone(), conflict))
        })
        .collect()
}

/// Returns the periods derived from a teacher's stored assignment for a week.
///
/// `table` is the lookup built from the state's subjects; callers totalling
/// several teachers build it once and pass it to every call. A week without
/// an assignment yields 0.
#[must_use]
pub fn assigned_periods(
    state: &State,
    table: &SubjectPeriodTable,
    week: WeekNumber,
    teacher_id: &TeacherId,
) -> f64 {
    let Some(text) = state.assignments.get(week, teacher_id) else {
        return 0.0;
    };
    table.total_periods(text, state.settings.duplicate_class_policy)
}

/// Returns the assigned periods of every teacher for a week, in directory order.
#[must_use]
pub fn week_periods(state: &State, week: WeekNumber) -> Vec<(TeacherId, f64)> {
    let table: SubjectPeriodTable = state.period_table();
    state
        .teachers
        .iter()
        .map(|teacher| {
            let periods: f64 = assigned_periods(state, &table, week, &teacher.id);
            (teacher.id.clone(), periods)
        })
        .collect()
}

/// Aggregates one teacher's balance over weeks `1..=week_count`.
///
/// # Errors
///
/// Returns `DomainError::TeacherNotFound` if the teacher does not exist, or
/// `DomainError::WeekCountTooLarge` if `week_count` is out of bounds.
pub fn teacher_balance(
    state: &State,
    teacher_id: &TeacherId,
    week_count: u32,
) -> Result<WorkloadBalance, DomainError> {
    let teacher: &Teacher = state
        .teacher(teacher_id)
        .ok_or_else(|| DomainError::TeacherNotFound(teacher_id.clone()))?;

    aggregate_balance(
        teacher,
        week_count,
        &state.assignments,
        &state.actuals,
        &state.period_table(),
        &state.settings,
        &state.roles,
    )
}

/// Aggregates every teacher's balance over weeks `1..=week_count`.
///
/// # Errors
///
/// Returns `DomainError::WeekCountTooLarge` if `week_count` is out of bounds.
pub fn school_balances(
    state: &State,
    week_count: u32,
) -> Result<Vec<WorkloadBalance>, DomainError> {
    aggregate_all(
        &state.teachers,
        week_count,
        &state.assignments,
        &state.actuals,
        &state.period_table(),
        &state.settings,
        &state.roles,
    )
}
