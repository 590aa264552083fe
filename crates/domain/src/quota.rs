// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly quota and multi-week balance calculation.
//!
//! Everything here is a pure projection of its inputs: nothing is stored
//! and results must be recomputed whenever teachers, roles, settings or
//! weekly data change.

use crate::defaults::MAX_BALANCE_WEEKS;
use crate::error::DomainError;
use crate::periods::SubjectPeriodTable;
use crate::types::{Role, RoleId, Settings, Teacher, TeacherId, WeekNumber};
use crate::weekly::WeeklySnapshotStore;
use serde::{Deserialize, Serialize};

/// Assigned and taught periods for one week of a balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekLine {
    /// The week.
    pub week: WeekNumber,
    /// Periods derived from the week's assignment string.
    pub assigned_periods: f64,
    /// Periods actually taught (0 when nothing was recorded).
    pub actual: f64,
}

/// Quota versus taught periods for one teacher over weeks `1..=N`.
///
/// A positive `balance` is a surplus (over-taught), a negative one a
/// deficit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadBalance {
    /// The teacher.
    pub teacher_id: TeacherId,
    /// Display name of the teacher.
    pub teacher_name: String,
    /// Number of weeks aggregated.
    pub week_count: u32,
    /// Total role reduction per week.
    pub reduction: f64,
    /// Standard quota minus reduction, floored at 0.
    pub effective_weekly_quota: f64,
    /// `effective_weekly_quota * week_count`.
    pub total_quota: f64,
    /// Sum of taught periods over the weeks.
    pub total_actual: f64,
    /// `total_actual - total_quota`.
    pub balance: f64,
    /// Per-week breakdown.
    pub weeks: Vec<WeekLine>,
}

/// Drops repeated role ids, keeping the first occurrence of each.
#[must_use]
pub fn unique_role_ids<I>(ids: I) -> Vec<RoleId>
where
    I: IntoIterator<Item = RoleId>,
{
    let mut unique: Vec<RoleId> = Vec::new();
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

/// Sums the reductions of the teacher's roles.
///
/// Each role counts once, however often it is referenced. Role references
/// that do not resolve contribute 0.
#[must_use]
pub fn total_reduction(teacher: &Teacher, roles: &[Role]) -> f64 {
    unique_role_ids(teacher.role_ids.iter().copied())
        .into_iter()
        .filter_map(|id| roles.iter().find(|role| role.id == id))
        .map(|role| role.reduction)
        .sum()
}

/// Computes the weekly quota after role reductions, never below 0.
#[must_use]
pub fn effective_weekly_quota(teacher: &Teacher, standard_quota: f64, roles: &[Role]) -> f64 {
    (standard_quota - total_reduction(teacher, roles)).max(0.0)
}

/// Aggregates a teacher's quota and taught periods over weeks `1..=week_count`.
///
/// The range always starts at week 1. Weeks without a recorded value
/// count as 0 taught periods.
///
/// # Arguments
///
/// * `teacher` - The teacher to aggregate
/// * `week_count` - Number of weeks, starting at week 1
/// * `assignments` - Weekly assignment strings
/// * `actuals` - Weekly taught periods
/// * `subjects` - Subject period lookup used for the per-week breakdown
/// * `settings` - Standard quota and duplicate-class policy
/// * `roles` - All roles
///
/// # Errors
///
/// Returns `DomainError::WeekCountTooLarge` if `week_count` exceeds
/// [`MAX_BALANCE_WEEKS`].
pub fn aggregate_balance<A, T>(
    teacher: &Teacher,
    week_count: u32,
    assignments: &A,
    actuals: &T,
    subjects: &SubjectPeriodTable,
    settings: &Settings,
    roles: &[Role],
) -> Result<WorkloadBalance, DomainError>
where
    A: WeeklySnapshotStore<Value = String>,
    T: WeeklySnapshotStore<Value = f64>,
{
    check_week_count(week_count)?;
    let reduction: f64 = total_reduction(teacher, roles);
    let effective: f64 = (settings.standard_quota - reduction).max(0.0);

    let weeks: Vec<WeekLine> = WeekNumber::first_n(week_count)
        .map(|week| WeekLine {
            week,
            assigned_periods: assignments
                .get(week, &teacher.id)
                .map_or(0.0, |text| {
                    subjects.total_periods(text, settings.duplicate_class_policy)
                }),
            actual: actuals.get(week, &teacher.id).copied().unwrap_or(0.0),
        })
        .collect();

    let total_quota: f64 = effective * f64::from(week_count);
    let total_actual: f64 = weeks.iter().map(|line| line.actual).sum();

    Ok(WorkloadBalance {
        teacher_id: teacher.id.clone(),
        teacher_name: teacher.name.clone(),
        week_count,
        reduction,
        effective_weekly_quota: effective,
        total_quota,
        total_actual,
        balance: total_actual - total_quota,
        weeks,
    })
}

/// Aggregates balances for every teacher, in directory order.
///
/// # Errors
///
/// See [`aggregate_balance`].
pub fn aggregate_all<A, T>(
    directory: &[Teacher],
    week_count: u32,
    assignments: &A,
    actuals: &T,
    subjects: &SubjectPeriodTable,
    settings: &Settings,
    roles: &[Role],
) -> Result<Vec<WorkloadBalance>, DomainError>
where
    A: WeeklySnapshotStore<Value = String>,
    T: WeeklySnapshotStore<Value = f64>,
{
    check_week_count(week_count)?;
    directory
        .iter()
        .map(|teacher| {
            aggregate_balance(
                teacher,
                week_count,
                assignments,
                actuals,
                subjects,
                settings,
                roles,
            )
        })
        .collect()
}

/// Resolves legacy role names to role ids.
///
/// Names are compared case-insensitively after trimming. Names that match
/// no role are dropped, so they keep contributing no reduction. A role
/// named more than once is returned once.
#[must_use]
pub fn resolve_role_names<S: AsRef<str>>(names: &[S], roles: &[Role]) -> Vec<RoleId> {
    unique_role_ids(names.iter().filter_map(|name| {
        let wanted: String = name.as_ref().trim().to_lowercase();
        roles
            .iter()
            .find(|role| role.name.trim().to_lowercase() == wanted)
            .map(|role| role.id)
    }))
}

const fn check_week_count(week_count: u32) -> Result<(), DomainError> {
    if week_count > MAX_BALANCE_WEEKS {
        return Err(DomainError::WeekCountTooLarge {
            requested: week_count,
            max: MAX_BALANCE_WEEKS,
        });
    }
    Ok(())
}
