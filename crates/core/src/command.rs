// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use workload_domain::{DuplicateClassPolicy, RoleId, TeacherId, WeekNumber};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a teacher to the directory.
    AddTeacher {
        /// The new teacher's id.
        id: TeacherId,
        /// Display name.
        name: String,
        /// Roles the teacher holds.
        role_ids: Vec<RoleId>,
    },
    /// Change a teacher's display name.
    RenameTeacher {
        /// The teacher.
        id: TeacherId,
        /// New display name.
        name: String,
    },
    /// Replace a teacher's roles.
    SetTeacherRoles {
        /// The teacher.
        id: TeacherId,
        /// New role list.
        role_ids: Vec<RoleId>,
    },
    /// Remove a teacher together with their weekly data.
    RemoveTeacher {
        /// The teacher.
        id: TeacherId,
    },
    /// Create a role.
    AddRole {
        /// Role name, unique case-insensitively.
        name: String,
        /// Periods per week subtracted from the standard quota.
        reduction: f64,
    },
    /// Rename a role. Teachers holding it stay attached.
    RenameRole {
        /// The role.
        id: RoleId,
        /// New name.
        name: String,
    },
    /// Change a role's reduction.
    SetRoleReduction {
        /// The role.
        id: RoleId,
        /// New reduction.
        reduction: f64,
    },
    /// Delete a role and detach it from every teacher.
    RemoveRole {
        /// The role.
        id: RoleId,
    },
    /// Insert or update a subject's periods per class.
    SetSubjectPeriods {
        /// Subject name.
        name: String,
        /// Periods per class per week.
        periods: f64,
    },
    /// Remove a subject from the period table.
    RemoveSubject {
        /// Subject name.
        name: String,
    },
    /// Change the standard weekly quota.
    SetStandardQuota {
        /// New quota.
        quota: f64,
    },
    /// Change the grades accepted by the class format check.
    SetGradeRange {
        /// Lowest accepted grade.
        min: u32,
        /// Highest accepted grade.
        max: u32,
    },
    /// Change how duplicate classes are totalled.
    SetDuplicateClassPolicy {
        /// New policy.
        policy: DuplicateClassPolicy,
    },
    /// Save a teacher's assignment string for a week. Blank text clears it.
    SetAssignment {
        /// The week.
        week: WeekNumber,
        /// The teacher.
        teacher_id: TeacherId,
        /// Raw assignment string.
        text: String,
    },
    /// Record the periods a teacher actually taught in a week.
    SetActual {
        /// The week.
        week: WeekNumber,
        /// The teacher.
        teacher_id: TeacherId,
        /// Periods taught.
        periods: f64,
    },
    /// Copy selected teachers' assignments from one week to another.
    CopySelected {
        /// Week to copy from.
        source: WeekNumber,
        /// Week to copy into.
        target: WeekNumber,
        /// Teachers to copy.
        teacher_ids: Vec<TeacherId>,
    },
}

impl Command {
    /// Returns the audit action name for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddTeacher { .. } => "AddTeacher",
            Self::RenameTeacher { .. } => "RenameTeacher",
            Self::SetTeacherRoles { .. } => "SetTeacherRoles",
            Self::RemoveTeacher { .. } => "RemoveTeacher",
            Self::AddRole { .. } => "AddRole",
            Self::RenameRole { .. } => "RenameRole",
            Self::SetRoleReduction { .. } => "SetRoleReduction",
            Self::RemoveRole { .. } => "RemoveRole",
            Self::SetSubjectPeriods { .. } => "SetSubjectPeriods",
            Self::RemoveSubject { .. } => "RemoveSubject",
            Self::SetStandardQuota { .. } => "SetStandardQuota",
            Self::SetGradeRange { .. } => "SetGradeRange",
            Self::SetDuplicateClassPolicy { .. } => "SetDuplicateClassPolicy",
            Self::SetAssignment { .. } => "SetAssignment",
            Self::SetActual { .. } => "SetActual",
            Self::CopySelected { .. } => "CopySelected",
        }
    }

    /// Returns the week this command concerns, if any.
    #[must_use]
    pub const fn week(&self) -> Option<WeekNumber> {
        match self {
            Self::SetAssignment { week, .. } | Self::SetActual { week, .. } => Some(*week),
            Self::CopySelected { target, .. } => Some(*target),
            _ => None,
        }
    }
}
