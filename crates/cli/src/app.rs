// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use color_eyre::eyre::{Context, Result, eyre};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;
use tracing::{info, warn};
use workload::{
    AssignmentFeedback, Command, State, TransitionOutcome, TransitionResult, apply,
    assigned_periods, check_assignment, school_balances, teacher_balance, week_periods,
};
use workload_audit::{Actor, Cause};
use workload_domain::{
    Conflict, DomainError, RoleId, SubjectPeriodTable, TeacherId, WeekNumber, WeeklySnapshotStore,
    WorkloadBalance, default_copy_source, unique_role_ids,
};
use workload_persistence::{Persistence, StoredAuditEvent};

use crate::args::{CliCommand, RoleCommand, SubjectCommand, TeacherCommand};
use crate::import::{ImportRow, preview_teacher_import};
use crate::render;

/// Actor type recorded for changes made from the command line.
const ACTOR_TYPE: &str = "cli";

/// Loaded state plus the store it came from.
///
/// Every mutating command goes through [`App::execute`], which applies it to
/// the current state and persists the result before the state is replaced.
pub struct App {
    persistence: Persistence,
    state: State,
    actor: Actor,
    reason: Option<String>,
    json: bool,
}

#[derive(Serialize)]
struct PeriodsReport<'a> {
    week: WeekNumber,
    teacher_id: &'a TeacherId,
    assignment: Option<&'a str>,
    periods: f64,
}

#[derive(Serialize)]
struct CopyReport<'a> {
    event_id: i64,
    source: WeekNumber,
    target: WeekNumber,
    copied_count: usize,
    skipped: &'a [TeacherId],
}

#[derive(Serialize)]
struct AppliedReport<'a> {
    event_id: i64,
    action: &'a str,
    details: Option<&'a str>,
}

impl App {
    /// Loads the state from `persistence`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored state cannot be read.
    pub fn new(
        mut persistence: Persistence,
        actor_id: &str,
        reason: Option<String>,
        json: bool,
    ) -> Result<Self> {
        let state: State = persistence
            .load_state_or_default()
            .wrap_err("Failed to load workload state")?;
        Ok(Self {
            persistence,
            state,
            actor: Actor::new(actor_id.to_string(), String::from(ACTOR_TYPE)),
            reason,
            json,
        })
    }

    #[cfg(test)]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Runs one command line and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is rejected or persistence fails.
    pub fn run(&mut self, command: CliCommand) -> Result<String> {
        match command {
            CliCommand::Show { week } => {
                let week: WeekNumber = parse_week(week)?;
                if self.json {
                    return to_json(&WeekReport::new(&self.state, week));
                }
                Ok(render::week(&self.state, week))
            }
            CliCommand::Check {
                week,
                teacher,
                text,
            } => {
                let week: WeekNumber = parse_week(week)?;
                let feedback: AssignmentFeedback =
                    check_assignment(&self.state, week, &TeacherId::new(&teacher), &text);
                self.feedback_output(&feedback)
            }
            CliCommand::Assign {
                week,
                teacher,
                text,
            } => {
                let applied: Applied = self.execute(Command::SetAssignment {
                    week: parse_week(week)?,
                    teacher_id: TeacherId::new(&teacher),
                    text,
                })?;
                match &applied.result.outcome {
                    TransitionOutcome::AssignmentSaved(feedback) => {
                        if !feedback.conflicts.is_empty() {
                            warn!(
                                count = feedback.conflicts.len(),
                                "Assignment saved with conflicts"
                            );
                        }
                        self.feedback_output(feedback)
                    }
                    _ => self.applied_output(&applied),
                }
            }
            CliCommand::Actual {
                week,
                teacher,
                periods,
            } => {
                let applied: Applied = self.execute(Command::SetActual {
                    week: parse_week(week)?,
                    teacher_id: TeacherId::new(&teacher),
                    periods,
                })?;
                self.applied_output(&applied)
            }
            CliCommand::Copy { to, from, teachers } => {
                let target: WeekNumber = parse_week(to)?;
                let source: WeekNumber = match from {
                    Some(from) => parse_week(from)?,
                    None => default_copy_source(target)?,
                };
                let teacher_ids: Vec<TeacherId> =
                    teachers.iter().map(|t| TeacherId::new(t)).collect();
                let applied: Applied = self.execute(Command::CopySelected {
                    source,
                    target,
                    teacher_ids,
                })?;
                self.copy_output(&applied, source, target)
            }
            CliCommand::Periods { week, teacher } => {
                let week: WeekNumber = parse_week(week)?;
                let teacher_id: TeacherId = TeacherId::new(&teacher);
                let table: SubjectPeriodTable = self.state.period_table();
                let periods: f64 = assigned_periods(&self.state, &table, week, &teacher_id);
                if self.json {
                    return to_json(&PeriodsReport {
                        week,
                        teacher_id: &teacher_id,
                        assignment: self
                            .state
                            .assignments
                            .get(week, &teacher_id)
                            .map(String::as_str),
                        periods,
                    });
                }
                Ok(format!("{teacher_id} week {week}: {periods} periods\n"))
            }
            CliCommand::Balance { weeks, teacher } => {
                let balances: Vec<WorkloadBalance> = match teacher {
                    Some(id) => vec![teacher_balance(&self.state, &TeacherId::new(&id), weeks)?],
                    None => school_balances(&self.state, weeks)?,
                };
                if self.json {
                    return to_json(&balances);
                }
                Ok(render::balances(&balances))
            }
            CliCommand::Teacher { command } => self.run_teacher(command),
            CliCommand::Role { command } => self.run_role(command),
            CliCommand::Subject { command } => self.run_subject(command),
            CliCommand::Quota { quota } => {
                let applied: Applied = self.execute(Command::SetStandardQuota { quota })?;
                self.applied_output(&applied)
            }
            CliCommand::Grades { min, max } => {
                let applied: Applied = self.execute(Command::SetGradeRange { min, max })?;
                self.applied_output(&applied)
            }
            CliCommand::Policy { policy } => {
                let applied: Applied = self.execute(Command::SetDuplicateClassPolicy { policy })?;
                self.applied_output(&applied)
            }
            CliCommand::Audit { limit, week } => {
                let events: Vec<StoredAuditEvent> = match week {
                    Some(week) => self
                        .persistence
                        .list_audit_events_for_week(parse_week(week)?)?,
                    None => self.persistence.list_audit_events(limit)?,
                };
                if self.json {
                    return to_json(&events);
                }
                Ok(render::audit(&events))
            }
        }
    }

    fn run_teacher(&mut self, command: TeacherCommand) -> Result<String> {
        let command: Command = match command {
            TeacherCommand::List => {
                if self.json {
                    return to_json(&self.state.teachers);
                }
                return Ok(render::teachers(&self.state));
            }
            TeacherCommand::Import { path, dry_run } => return self.import(&path, dry_run),
            TeacherCommand::Add { id, name, roles } => Command::AddTeacher {
                id: TeacherId::new(&id),
                name,
                role_ids: self.role_ids_by_name(&roles)?,
            },
            TeacherCommand::Rename { id, name } => Command::RenameTeacher {
                id: TeacherId::new(&id),
                name,
            },
            TeacherCommand::Roles { id, roles } => Command::SetTeacherRoles {
                id: TeacherId::new(&id),
                role_ids: self.role_ids_by_name(&roles)?,
            },
            TeacherCommand::Remove { id } => Command::RemoveTeacher {
                id: TeacherId::new(&id),
            },
        };
        let applied: Applied = self.execute(command)?;
        self.applied_output(&applied)
    }

    fn run_role(&mut self, command: RoleCommand) -> Result<String> {
        let command: Command = match command {
            RoleCommand::List => {
                if self.json {
                    return to_json(&self.state.roles);
                }
                return Ok(render::roles(&self.state));
            }
            RoleCommand::Add { name, reduction } => Command::AddRole { name, reduction },
            RoleCommand::Rename { role, name } => Command::RenameRole {
                id: self.find_role(&role)?,
                name,
            },
            RoleCommand::Reduce { role, reduction } => Command::SetRoleReduction {
                id: self.find_role(&role)?,
                reduction,
            },
            RoleCommand::Remove { role } => Command::RemoveRole {
                id: self.find_role(&role)?,
            },
        };
        let applied: Applied = self.execute(command)?;
        self.applied_output(&applied)
    }

    fn run_subject(&mut self, command: SubjectCommand) -> Result<String> {
        let command: Command = match command {
            SubjectCommand::List => {
                if self.json {
                    return to_json(&self.state.subjects);
                }
                return Ok(render::subjects(&self.state));
            }
            SubjectCommand::Set { name, periods } => Command::SetSubjectPeriods { name, periods },
            SubjectCommand::Remove { name } => Command::RemoveSubject { name },
        };
        let applied: Applied = self.execute(command)?;
        self.applied_output(&applied)
    }

    fn import(&mut self, path: &Path, dry_run: bool) -> Result<String> {
        let content: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let rows: Vec<ImportRow> = preview_teacher_import(&content, &self.state)?;

        if !dry_run {
            for row in &rows {
                if let Some(command) = row.command() {
                    self.execute(command)
                        .wrap_err_with(|| format!("Failed to import row {}", row.row_number))?;
                } else {
                    warn!(row = row.row_number, errors = ?row.errors, "Skipping CSV row");
                }
            }
        }

        if self.json {
            return to_json(&rows);
        }
        Ok(render::import_rows(&rows))
    }

    /// Applies a command to the current state, persists the result and
    /// replaces the state. Returns the new audit event id with the result.
    fn execute(&mut self, command: Command) -> Result<Applied> {
        let action: &'static str = command.name();
        let cause: Cause = Cause::new(
            String::from(action),
            self.reason
                .clone()
                .unwrap_or_else(|| String::from("Command-line edit")),
        );

        let result: TransitionResult = apply(&self.state, command, self.actor.clone(), cause)
            .wrap_err_with(|| format!("{action} rejected"))?;
        let event_id: i64 = self
            .persistence
            .persist_transition(&result)
            .wrap_err("Failed to persist transition")?;

        info!(event_id, action, "Applied command");
        self.state = result.new_state.clone();
        Ok(Applied { event_id, result })
    }

    /// Resolves role names for the teacher commands; unknown names are errors.
    ///
    /// A role named twice is returned once.
    fn role_ids_by_name(&self, names: &[String]) -> Result<Vec<RoleId>> {
        let ids: Vec<RoleId> = names
            .iter()
            .map(|name| {
                self.state
                    .role_by_name(name)
                    .map(|r| r.id)
                    .ok_or_else(|| eyre!("Unknown role '{name}'"))
            })
            .collect::<Result<Vec<RoleId>>>()?;
        Ok(unique_role_ids(ids))
    }

    /// Finds a role by name, or by numeric id when no name matches.
    fn find_role(&self, role: &str) -> Result<RoleId> {
        if let Some(found) = self.state.role_by_name(role) {
            return Ok(found.id);
        }
        role.trim()
            .parse::<u32>()
            .ok()
            .map(RoleId::new)
            .filter(|id| self.state.role(*id).is_some())
            .ok_or_else(|| eyre!("Unknown role '{role}'"))
    }

    fn feedback_output(&self, feedback: &AssignmentFeedback) -> Result<String> {
        if self.json {
            return to_json(feedback);
        }
        Ok(render::feedback(feedback))
    }

    fn applied_output(&self, applied: &Applied) -> Result<String> {
        let result: &TransitionResult = &applied.result;
        let details: Option<&str> = result.audit_event.action.details.as_deref();
        if self.json {
            return to_json(&AppliedReport {
                event_id: applied.event_id,
                action: &result.audit_event.action.name,
                details,
            });
        }
        Ok(format!("{}\n", details.unwrap_or(&result.audit_event.action.name)))
    }

    fn copy_output(
        &self,
        applied: &Applied,
        source: WeekNumber,
        target: WeekNumber,
    ) -> Result<String> {
        let TransitionOutcome::Copied {
            copied_count,
            skipped,
        } = &applied.result.outcome
        else {
            return self.applied_output(applied);
        };
        if self.json {
            return to_json(&CopyReport {
                event_id: applied.event_id,
                source,
                target,
                copied_count: *copied_count,
                skipped,
            });
        }
        let mut out: String =
            format!("Copied {copied_count} teacher(s) from week {source} to week {target}\n");
        if !skipped.is_empty() {
            let names: Vec<&str> = skipped.iter().map(TeacherId::value).collect();
            let _ = writeln!(
                out,
                "No assignment in week {source} for: {}",
                names.join(", ")
            );
        }
        Ok(out)
    }
}

/// A persisted transition.
struct Applied {
    event_id: i64,
    result: TransitionResult,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json: String =
        serde_json::to_string_pretty(value).wrap_err("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

/// JSON form of the `show` command.
#[derive(Serialize)]
struct WeekReport<'a> {
    week: WeekNumber,
    teachers: Vec<WeekReportLine<'a>>,
    conflicts: Vec<(TeacherId, Conflict)>,
}

#[derive(Serialize)]
struct WeekReportLine<'a> {
    teacher_id: &'a TeacherId,
    teacher_name: &'a str,
    assignment: Option<&'a str>,
    assigned_periods: f64,
    actual: Option<f64>,
}

impl<'a> WeekReport<'a> {
    fn new(state: &'a State, week: WeekNumber) -> Self {
        let teachers: Vec<WeekReportLine<'a>> = state
            .teachers
            .iter()
            .zip(week_periods(state, week))
            .map(|(t, (_, assigned_periods))| WeekReportLine {
                teacher_id: &t.id,
                teacher_name: &t.name,
                assignment: state.assignments.get(week, &t.id).map(String::as_str),
                assigned_periods,
                actual: state.actuals.get(week, &t.id).copied(),
            })
            .collect();
        Self {
            week,
            teachers,
            conflicts: workload::week_conflicts(state, week),
        }
    }
}

fn parse_week(value: u32) -> Result<WeekNumber, DomainError> {
    WeekNumber::new(value)
}
