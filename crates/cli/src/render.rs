// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of query results.

use std::fmt::Write;
use workload::{AssignmentFeedback, State, week_conflicts, week_periods};
use workload_domain::{
    IgnoreReason, WeekNumber, WeeklySnapshotStore, WorkloadBalance, effective_weekly_quota,
};
use workload_persistence::StoredAuditEvent;

use crate::import::{ImportRow, RowStatus};

const fn ignore_reason(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::MissingSeparator => "missing ':'",
        IgnoreReason::MissingSubject => "missing subject",
        IgnoreReason::MissingClasses => "missing classes",
    }
}

pub fn feedback(feedback: &AssignmentFeedback) -> String {
    let mut out: String = format!("Total periods: {}\n", feedback.total_periods);
    for conflict in &feedback.conflicts {
        let _ = writeln!(out, "Conflict: {conflict}");
    }
    for error in &feedback.format_errors {
        let _ = writeln!(out, "Format error: {error}");
    }
    for segment in &feedback.ignored {
        let _ = writeln!(
            out,
            "Ignored segment {}: '{}' ({})",
            segment.position + 1,
            segment.text,
            ignore_reason(segment.reason)
        );
    }
    if feedback.is_clean() {
        out.push_str("No problems found\n");
    }
    out
}

pub fn week(state: &State, week: WeekNumber) -> String {
    let mut out: String = format!("Week {week}\n");
    for (teacher, (_, periods)) in state.teachers.iter().zip(week_periods(state, week)) {
        let text: &str = state
            .assignments
            .get(week, &teacher.id)
            .map_or("-", String::as_str);
        let actual: String = state
            .actuals
            .get(week, &teacher.id)
            .map_or_else(|| String::from("-"), ToString::to_string);
        let _ = writeln!(
            out,
            "  {:<8} {:<24} {:>5} periods  {:>5} taught  {text}",
            teacher.id.value(),
            teacher.name,
            periods,
            actual,
        );
    }
    let conflicts = week_conflicts(state, week);
    if !conflicts.is_empty() {
        out.push_str("Conflicts:\n");
        for (teacher_id, conflict) in conflicts {
            let _ = writeln!(out, "  {teacher_id}: {conflict}");
        }
    }
    out
}

pub fn balances(balances: &[WorkloadBalance]) -> String {
    let mut out: String = String::new();
    for b in balances {
        let _ = writeln!(
            out,
            "{:<8} {:<24} weeks {:>2}  quota {:>6} (weekly {:>4})  taught {:>6}  balance {:>+7}",
            b.teacher_id.value(),
            b.teacher_name,
            b.week_count,
            b.total_quota,
            b.effective_weekly_quota,
            b.total_actual,
            b.balance,
        );
    }
    out
}

pub fn teachers(state: &State) -> String {
    let mut out: String = String::new();
    for teacher in &state.teachers {
        let quota: f64 =
            effective_weekly_quota(teacher, state.settings.standard_quota, &state.roles);
        let _ = writeln!(
            out,
            "{:<8} {:<24} quota {:>4}  roles: {}",
            teacher.id.value(),
            teacher.name,
            quota,
            state.role_names(teacher).join(", ")
        );
    }
    out
}

pub fn roles(state: &State) -> String {
    let mut out: String = String::new();
    for role in &state.roles {
        let _ = writeln!(out, "{:>3}  {:<28} -{}", role.id, role.name, role.reduction);
    }
    out
}

pub fn subjects(state: &State) -> String {
    let mut out: String = String::new();
    for subject in &state.subjects {
        let _ = writeln!(out, "{:<24} {}", subject.name, subject.periods);
    }
    out
}

pub fn import_rows(rows: &[ImportRow]) -> String {
    let mut out: String = String::new();
    for row in rows {
        let status: &str = match row.status {
            RowStatus::Valid => "ok",
            RowStatus::Invalid => "skipped",
        };
        let _ = writeln!(out, "row {:>3} {:<8} {status}", row.row_number, row.id);
        for error in &row.errors {
            let _ = writeln!(out, "    {error}");
        }
        if !row.unknown_roles.is_empty() {
            let _ = writeln!(out, "    unknown roles: {}", row.unknown_roles.join(", "));
        }
    }
    out
}

pub fn audit(events: &[StoredAuditEvent]) -> String {
    let mut out: String = String::new();
    for stored in events {
        let event = &stored.event;
        let week: String = event
            .week
            .map_or_else(String::new, |w| format!(" [week {w}]"));
        let _ = writeln!(
            out,
            "#{} {} {}{} by {}: {}",
            stored.event_id,
            stored.created_at,
            event.action.name,
            week,
            event.actor.id,
            event.action.details.as_deref().unwrap_or(""),
        );
    }
    out
}
