// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{RoleId, TeacherId, WeekNumber};
use serde::{Deserialize, Serialize};

/// Errors that can occur during domain validation.
///
/// Every variant is recoverable: the caller reports it and keeps the
/// previous state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Week numbers are 1-based.
    #[error("Invalid week number {0}: weeks start at 1")]
    InvalidWeekNumber(u32),
    /// A period count, reduction or quota was negative or not finite.
    #[error("Invalid {field}: {value} must be a finite, non-negative number")]
    InvalidPeriodCount {
        /// Which value was rejected.
        field: &'static str,
        /// The rejected value, rendered for display.
        value: String,
    },
    /// Grade range bounds are reversed.
    #[error("Invalid grade range: {min} is greater than {max}")]
    InvalidGradeRange {
        /// The requested lower bound.
        min: u32,
        /// The requested upper bound.
        max: u32,
    },
    /// Unknown duplicate-class policy name.
    #[error("Invalid duplicate class policy '{0}'")]
    InvalidPolicy(String),
    /// Teacher id is empty.
    #[error("Invalid teacher id: {0}")]
    InvalidTeacherId(String),
    /// Name (teacher, role or subject) is empty.
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// A teacher with this id already exists.
    #[error("Teacher '{0}' already exists")]
    DuplicateTeacher(TeacherId),
    /// Teacher does not exist.
    #[error("Teacher '{0}' not found")]
    TeacherNotFound(TeacherId),
    /// A role with this name already exists.
    #[error("Role '{0}' already exists")]
    DuplicateRole(String),
    /// Role does not exist.
    #[error("Role {0} not found")]
    RoleNotFound(RoleId),
    /// Subject does not exist in the subject-period table.
    #[error("Subject '{0}' not found")]
    SubjectNotFound(String),
    /// Copy-forward requested without any selected teacher.
    #[error("No teachers selected for copying")]
    NoTeachersSelected,
    /// Copy-forward source week holds no assignments.
    #[error("Week {0} has no assignments to copy")]
    EmptySourceWeek(WeekNumber),
    /// Copy-forward target has no preceding week.
    #[error("Week {0} has no previous week to copy from")]
    NoPredecessorWeek(WeekNumber),
    /// A balance was requested over more weeks than allowed.
    #[error("Cannot aggregate {requested} weeks: at most {max} are allowed")]
    WeekCountTooLarge {
        /// The requested number of weeks.
        requested: u32,
        /// The largest accepted number of weeks.
        max: u32,
    },
}

/// Advisory error produced by the class format validator.
///
/// Format errors are surfaced to the user but never block saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ClassFormatError {
    /// The token does not start with a digit.
    #[error("Class '{class}': missing grade")]
    MissingGrade {
        /// The offending class token.
        class: String,
    },
    /// The leading grade is outside the accepted range.
    #[error("Class '{class}': grade out of range ({grade} not in {min}-{max})")]
    GradeOutOfRange {
        /// The offending class token.
        class: String,
        /// The leading digits as written.
        grade: String,
        /// Lowest accepted grade.
        min: u32,
        /// Highest accepted grade.
        max: u32,
    },
}

impl ClassFormatError {
    /// Returns the class token this error refers to.
    #[must_use]
    pub fn class(&self) -> &str {
        match self {
            Self::MissingGrade { class } | Self::GradeOutOfRange { class, .. } => class,
        }
    }
}
