// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use workload_audit::{AuditEvent, StateSnapshot};
use workload_domain::defaults::{default_roles, default_subjects};
use workload_domain::{
    ClassFormatError, Conflict, IgnoredSegment, Role, RoleId, Settings, SubjectConfig,
    SubjectPeriodTable, Teacher, TeacherId, WeeklyActuals, WeeklyAssignments, subject_key,
};

/// The complete workload state of one school.
///
/// State is never mutated in place by commands: `apply` returns a new
/// value and the host replaces its copy wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// All teachers, in display order.
    pub teachers: Vec<Teacher>,
    /// All roles.
    pub roles: Vec<Role>,
    /// Subject-period table.
    pub subjects: Vec<SubjectConfig>,
    /// Engine-wide settings.
    pub settings: Settings,
    /// Assignment strings per week and teacher.
    #[serde(default)]
    pub assignments: WeeklyAssignments,
    /// Taught periods per week and teacher.
    #[serde(default)]
    pub actuals: WeeklyActuals,
}

impl State {
    /// Creates an empty state with the given settings.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            teachers: Vec::new(),
            roles: Vec::new(),
            subjects: Vec::new(),
            settings,
            assignments: WeeklyAssignments::new(),
            actuals: WeeklyActuals::new(),
        }
    }

    /// Creates the state used when nothing has been saved yet: standard
    /// quota 19, the default roles and the default subject table.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            roles: default_roles(),
            subjects: default_subjects(),
            ..Self::new(Settings::default())
        }
    }

    /// Looks up a teacher by id.
    #[must_use]
    pub fn teacher(&self, id: &TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|t| &t.id == id)
    }

    /// Looks up a role by id.
    #[must_use]
    pub fn role(&self, id: RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Looks up a role by name, case-insensitively.
    #[must_use]
    pub fn role_by_name(&self, name: &str) -> Option<&Role> {
        let wanted: String = name.trim().to_lowercase();
        self.roles
            .iter()
            .find(|r| r.name.trim().to_lowercase() == wanted)
    }

    /// Looks up a subject by name, using subject matching rules.
    #[must_use]
    pub fn subject(&self, name: &str) -> Option<&SubjectConfig> {
        let key: String = subject_key(name);
        self.subjects.iter().find(|s| subject_key(&s.name) == key)
    }

    /// Returns display names of a teacher's roles. Unknown ids are skipped.
    #[must_use]
    pub fn role_names(&self, teacher: &Teacher) -> Vec<String> {
        teacher
            .role_ids
            .iter()
            .filter_map(|id| self.role(*id))
            .map(|r| r.name.clone())
            .collect()
    }

    /// Builds the subject lookup for the current subject table.
    #[must_use]
    pub fn period_table(&self) -> SubjectPeriodTable {
        SubjectPeriodTable::new(&self.subjects)
    }

    /// Returns the id the next new role receives.
    #[must_use]
    pub fn next_role_id(&self) -> RoleId {
        let max: u32 = self.roles.iter().map(|r| r.id.value()).max().unwrap_or(0);
        RoleId::new(max.saturating_add(1))
    }

    /// Converts the state to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(format!(
            "teachers={},roles={},subjects={},standard_quota={},assignments={},actuals={}",
            self.teachers.len(),
            self.roles.len(),
            self.subjects.len(),
            self.settings.standard_quota,
            self.assignments.len(),
            self.actuals.len()
        ))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Advisory feedback on an assignment string.
///
/// Nothing in here blocks saving.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignmentFeedback {
    /// Claims that overlap with other teachers in the same week.
    pub conflicts: Vec<Conflict>,
    /// Class tokens failing the grade rule.
    pub format_errors: Vec<ClassFormatError>,
    /// Segments the parser dropped.
    pub ignored: Vec<IgnoredSegment>,
    /// Periods the assignment totals to.
    pub total_periods: f64,
}

impl AssignmentFeedback {
    /// Returns whether there is nothing to warn about.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.format_errors.is_empty() && self.ignored.is_empty()
    }
}

/// What a transition produced besides the new state.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The command was applied; nothing further to report.
    Applied,
    /// An assignment was saved; carries advisory feedback.
    AssignmentSaved(AssignmentFeedback),
    /// A copy-forward completed.
    Copied {
        /// Number of teachers copied.
        copied_count: usize,
        /// Requested teachers with no source value.
        skipped: Vec<TeacherId>,
    },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// Additional result of the command.
    pub outcome: TransitionOutcome,
}
