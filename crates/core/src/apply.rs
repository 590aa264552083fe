// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::query::check_assignment;
use crate::state::{AssignmentFeedback, State, TransitionOutcome, TransitionResult};
use workload_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use workload_domain::{
    CopyOutcome, DomainError, GradeRange, Role, RoleId, SubjectConfig, Teacher, TeacherId,
    WeekNumber, WeeklyAssignments, WeeklySnapshotStore, copy_selected, subject_key, unique_role_ids,
};

/// The part of a transition that differs per command.
struct Change {
    new_state: State,
    details: String,
    outcome: TransitionOutcome,
}

impl Change {
    const fn applied(new_state: State, details: String) -> Self {
        Self {
            new_state,
            details,
            outcome: TransitionOutcome::Applied,
        }
    }
}

/// Applies a command to the current state, producing a new state and audit event.
///
/// The input state is never modified. On error nothing has changed and the
/// caller keeps its current state.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, audit event and outcome
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A referenced teacher, role or subject does not exist
/// - A name is empty or a teacher id / role name is already taken
/// - A period count, reduction or quota is negative or not finite
/// - A copy-forward precondition fails
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let action_name: &'static str = command.name();
    let week: Option<WeekNumber> = command.week();

    let before: StateSnapshot = state.to_snapshot();
    let change: Change = apply_change(state, command)?;
    let after: StateSnapshot = change.new_state.to_snapshot();

    let action: Action = Action::new(String::from(action_name), Some(change.details));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after, week);

    Ok(TransitionResult {
        new_state: change.new_state,
        audit_event,
        outcome: change.outcome,
    })
}

#[allow(clippy::too_many_lines)]
fn apply_change(state: &State, command: Command) -> Result<Change, DomainError> {
    match command {
        Command::AddTeacher { id, name, role_ids } => {
            if id.value().is_empty() {
                return Err(DomainError::InvalidTeacherId(String::from(
                    "Teacher id cannot be empty",
                )));
            }
            if state.teacher(&id).is_some() {
                return Err(DomainError::DuplicateTeacher(id));
            }
            let name: String = validate_name(&name, "Teacher name")?;
            validate_roles_exist(state, &role_ids)?;
            let role_ids: Vec<RoleId> = unique_role_ids(role_ids);

            let mut new_state: State = state.clone();
            let details: String = format!("Added teacher '{name}' ({id})");
            new_state.teachers.push(Teacher::new(id, name, role_ids));
            Ok(Change::applied(new_state, details))
        }
        Command::RenameTeacher { id, name } => {
            let name: String = validate_name(&name, "Teacher name")?;
            let mut new_state: State = state.clone();
            let teacher: &mut Teacher = teacher_mut(&mut new_state, &id)?;
            let details: String =
                format!("Renamed teacher {id} from '{}' to '{name}'", teacher.name);
            teacher.name = name;
            Ok(Change::applied(new_state, details))
        }
        Command::SetTeacherRoles { id, role_ids } => {
            validate_roles_exist(state, &role_ids)?;
            let mut new_state: State = state.clone();
            let teacher: &mut Teacher = teacher_mut(&mut new_state, &id)?;
            teacher.role_ids = unique_role_ids(role_ids);
            let details: String = format!(
                "Set roles of teacher {id} to [{}]",
                join_ids(&teacher.role_ids)
            );
            Ok(Change::applied(new_state, details))
        }
        Command::RemoveTeacher { id } => {
            if state.teacher(&id).is_none() {
                return Err(DomainError::TeacherNotFound(id));
            }
            let mut new_state: State = state.clone();
            new_state.teachers.retain(|t| t.id != id);
            new_state.assignments.remove_teacher(&id);
            new_state.actuals.remove_teacher(&id);
            Ok(Change::applied(
                new_state,
                format!("Removed teacher {id} and their weekly data"),
            ))
        }
        Command::AddRole { name, reduction } => {
            let name: String = validate_name(&name, "Role name")?;
            let reduction: f64 = validate_non_negative("role reduction", reduction)?;
            if state.role_by_name(&name).is_some() {
                return Err(DomainError::DuplicateRole(name));
            }

            let mut new_state: State = state.clone();
            let id: RoleId = state.next_role_id();
            let details: String = format!("Added role {id} '{name}' with reduction {reduction}");
            new_state.roles.push(Role::new(id, name, reduction));
            Ok(Change::applied(new_state, details))
        }
        Command::RenameRole { id, name } => {
            let name: String = validate_name(&name, "Role name")?;
            if state.role_by_name(&name).is_some_and(|r| r.id != id) {
                return Err(DomainError::DuplicateRole(name));
            }
            let mut new_state: State = state.clone();
            let role: &mut Role = role_mut(&mut new_state, id)?;
            let details: String = format!("Renamed role {id} from '{}' to '{name}'", role.name);
            role.name = name;
            Ok(Change::applied(new_state, details))
        }
        Command::SetRoleReduction { id, reduction } => {
            let reduction: f64 = validate_non_negative("role reduction", reduction)?;
            let mut new_state: State = state.clone();
            let role: &mut Role = role_mut(&mut new_state, id)?;
            let details: String = format!(
                "Changed reduction of role '{}' from {} to {reduction}",
                role.name, role.reduction
            );
            role.reduction = reduction;
            Ok(Change::applied(new_state, details))
        }
        Command::RemoveRole { id } => {
            let Some(role) = state.role(id) else {
                return Err(DomainError::RoleNotFound(id));
            };
            let details: String = format!("Removed role {id} '{}'", role.name);
            let mut new_state: State = state.clone();
            new_state.roles.retain(|r| r.id != id);
            for teacher in &mut new_state.teachers {
                teacher.role_ids.retain(|r| *r != id);
            }
            Ok(Change::applied(new_state, details))
        }
        Command::SetSubjectPeriods { name, periods } => {
            let name: String = validate_name(&name, "Subject name")?;
            let periods: f64 = validate_non_negative("subject periods", periods)?;
            let key: String = subject_key(&name);

            let mut new_state: State = state.clone();
            let position: Option<usize> = new_state
                .subjects
                .iter()
                .position(|s| subject_key(&s.name) == key);
            let details: String = if let Some(idx) = position {
                let existing: &mut SubjectConfig = &mut new_state.subjects[idx];
                let details: String = format!(
                    "Changed periods of '{}' from {} to {periods}",
                    existing.name, existing.periods
                );
                existing.periods = periods;
                details
            } else {
                let details: String = format!("Added subject '{name}' with {periods} periods");
                new_state.subjects.push(SubjectConfig::new(name, periods));
                details
            };
            Ok(Change::applied(new_state, details))
        }
        Command::RemoveSubject { name } => {
            let Some(subject) = state.subject(&name) else {
                return Err(DomainError::SubjectNotFound(name));
            };
            let key: String = subject_key(&subject.name);
            let details: String = format!("Removed subject '{}'", subject.name);
            let mut new_state: State = state.clone();
            new_state.subjects.retain(|s| subject_key(&s.name) != key);
            Ok(Change::applied(new_state, details))
        }
        Command::SetStandardQuota { quota } => {
            let quota: f64 = validate_non_negative("standard quota", quota)?;
            let mut new_state: State = state.clone();
            let details: String = format!(
                "Changed standard quota from {} to {quota}",
                state.settings.standard_quota
            );
            new_state.settings.standard_quota = quota;
            Ok(Change::applied(new_state, details))
        }
        Command::SetGradeRange { min, max } => {
            let range: GradeRange = GradeRange::new(min, max)?;
            let previous: GradeRange = state.settings.grade_range;
            let mut new_state: State = state.clone();
            new_state.settings.grade_range = range;
            Ok(Change::applied(
                new_state,
                format!(
                    "Changed grade range from {}-{} to {min}-{max}",
                    previous.min, previous.max
                ),
            ))
        }
        Command::SetDuplicateClassPolicy { policy } => {
            let mut new_state: State = state.clone();
            new_state.settings.duplicate_class_policy = policy;
            Ok(Change::applied(new_state, format!("Set duplicate class policy to {policy}")))
        }
        Command::SetAssignment {
            week,
            teacher_id,
            text,
        } => {
            if state.teacher(&teacher_id).is_none() {
                return Err(DomainError::TeacherNotFound(teacher_id));
            }

            let mut new_state: State = state.clone();
            if text.trim().is_empty() {
                new_state.assignments.remove(week, &teacher_id);
                return Ok(Change {
                    new_state,
                    details: format!("Cleared assignment of teacher {teacher_id} for week {week}"),
                    outcome: TransitionOutcome::AssignmentSaved(AssignmentFeedback::default()),
                });
            }

            let feedback: AssignmentFeedback = check_assignment(state, week, &teacher_id, &text);
            let details: String = format!(
                "Set assignment of teacher {teacher_id} for week {week}: {} periods, {} conflicts",
                feedback.total_periods,
                feedback.conflicts.len()
            );
            new_state.assignments.set(week, teacher_id, text);
            Ok(Change {
                new_state,
                details,
                outcome: TransitionOutcome::AssignmentSaved(feedback),
            })
        }
        Command::SetActual {
            week,
            teacher_id,
            periods,
        } => {
            if state.teacher(&teacher_id).is_none() {
                return Err(DomainError::TeacherNotFound(teacher_id));
            }
            let periods: f64 = validate_non_negative("taught periods", periods)?;

            let mut new_state: State = state.clone();
            let details: String = format!(
                "Recorded {periods} taught periods for teacher {teacher_id} in week {week}"
            );
            new_state.actuals.set(week, teacher_id, periods);
            Ok(Change::applied(new_state, details))
        }
        Command::CopySelected {
            source,
            target,
            teacher_ids,
        } => {
            let copied: CopyOutcome<WeeklyAssignments> =
                copy_selected(source, target, &teacher_ids, &state.assignments)?;

            let mut new_state: State = state.clone();
            new_state.assignments = copied.updated;
            Ok(Change {
                new_state,
                details: format!(
                    "Copied {} of {} teachers from week {source} to week {target}",
                    copied.copied_count,
                    teacher_ids.len()
                ),
                outcome: TransitionOutcome::Copied {
                    copied_count: copied.copied_count,
                    skipped: copied.skipped,
                },
            })
        }
    }
}

fn teacher_mut<'a>(state: &'a mut State, id: &TeacherId) -> Result<&'a mut Teacher, DomainError> {
    state
        .teachers
        .iter_mut()
        .find(|t| &t.id == id)
        .ok_or_else(|| DomainError::TeacherNotFound(id.clone()))
}

fn role_mut(state: &mut State, id: RoleId) -> Result<&mut Role, DomainError> {
    state
        .roles
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(DomainError::RoleNotFound(id))
}

fn validate_roles_exist(state: &State, role_ids: &[RoleId]) -> Result<(), DomainError> {
    role_ids
        .iter()
        .find(|id| state.role(**id).is_none())
        .map_or(Ok(()), |missing| Err(DomainError::RoleNotFound(*missing)))
}

fn validate_name(name: &str, what: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(format!("{what} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvalidPeriodCount {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn join_ids(ids: &[RoleId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}
