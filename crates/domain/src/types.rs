// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of a teacher.
///
/// The host application chooses the value; the engine only compares it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherId(String);

impl TeacherId {
    /// Creates a new `TeacherId`.
    ///
    /// Surrounding whitespace is trimmed so ids typed on a command line
    /// compare equal to stored ones.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeacherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable numeric identifier of a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(u32);

impl RoleId {
    /// Creates a new `RoleId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 1-based teaching week number.
///
/// Week navigation is contiguous but storage is sparse, so any positive
/// value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WeekNumber(u32);

impl WeekNumber {
    /// The first week of the school year.
    pub const FIRST: Self = Self(1);

    /// Creates a new `WeekNumber`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekNumber` if `value` is zero.
    pub const fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidWeekNumber(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the previous week, or `None` for week 1.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        if self.0 > 1 { Some(Self(self.0 - 1)) } else { None }
    }

    /// Iterates weeks `1..=count`.
    pub fn first_n(count: u32) -> impl Iterator<Item = Self> {
        (1..=count).map(Self)
    }
}

impl TryFrom<u32> for WeekNumber {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekNumber> for u32 {
    fn from(week: WeekNumber) -> Self {
        week.0
    }
}

impl std::fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A teacher as seen by the engine.
///
/// Teachers reference roles by id. Display names are resolved from the
/// roles collection at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// The teacher's stable identity.
    pub id: TeacherId,
    /// The display name.
    pub name: String,
    /// Ordered role references.
    #[serde(default)]
    pub role_ids: Vec<RoleId>,
}

impl Teacher {
    /// Creates a new `Teacher`.
    ///
    /// # Arguments
    ///
    /// * `id` - The teacher's stable identity
    /// * `name` - The display name
    /// * `role_ids` - The roles this teacher holds
    #[must_use]
    pub const fn new(id: TeacherId, name: String, role_ids: Vec<RoleId>) -> Self {
        Self { id, name, role_ids }
    }
}

/// A school role that reduces the standard weekly quota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Stable identifier.
    pub id: RoleId,
    /// Display name, unique (case-insensitively) within the roles collection.
    pub name: String,
    /// Periods per week subtracted from the standard quota.
    pub reduction: f64,
}

impl Role {
    /// Creates a new `Role`.
    #[must_use]
    pub const fn new(id: RoleId, name: String, reduction: f64) -> Self {
        Self {
            id,
            name,
            reduction,
        }
    }
}

/// Periods taught per class per week for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectConfig {
    /// Subject name as displayed.
    pub name: String,
    /// Periods per class per week. May be fractional.
    pub periods: f64,
}

impl SubjectConfig {
    /// Creates a new `SubjectConfig`.
    #[must_use]
    pub const fn new(name: String, periods: f64) -> Self {
        Self { name, periods }
    }
}

/// Rule used when a teacher lists the same class twice for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DuplicateClassPolicy {
    /// Every listed class counts, duplicates included.
    #[default]
    CountAsWritten,
    /// Each (subject, class) pair counts once per assignment.
    Deduplicate,
}

impl DuplicateClassPolicy {
    /// Returns the string form used in configuration and the CLI.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CountAsWritten => "count-as-written",
            Self::Deduplicate => "deduplicate",
        }
    }
}

impl std::str::FromStr for DuplicateClassPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count-as-written" => Ok(Self::CountAsWritten),
            "deduplicate" => Ok(Self::Deduplicate),
            _ => Err(DomainError::InvalidPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for DuplicateClassPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive range of grades a class token may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRange {
    /// Lowest accepted grade.
    pub min: u32,
    /// Highest accepted grade.
    pub max: u32,
}

impl GradeRange {
    /// Creates a new `GradeRange`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGradeRange` if `min > max`.
    pub const fn new(min: u32, max: u32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidGradeRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns whether `grade` lies inside the range.
    #[must_use]
    pub const fn contains(&self, grade: u32) -> bool {
        grade >= self.min && grade <= self.max
    }
}

impl Default for GradeRange {
    /// Lower secondary school: grades 6 through 9.
    fn default() -> Self {
        Self { min: 6, max: 9 }
    }
}

/// Engine-wide settings shared by all teachers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Standard weekly quota before role reductions.
    pub standard_quota: f64,
    /// Grade range accepted by the class format validator.
    #[serde(default)]
    pub grade_range: GradeRange,
    /// How duplicate class tokens are counted when totalling periods.
    #[serde(default)]
    pub duplicate_class_policy: DuplicateClassPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            standard_quota: crate::defaults::DEFAULT_STANDARD_QUOTA,
            grade_range: GradeRange::default(),
            duplicate_class_policy: DuplicateClassPolicy::default(),
        }
    }
}
