// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workload_domain::DuplicateClassPolicy;

/// Teaching workload tracker: weekly assignments, conflicts and quota balances.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an in-memory database.
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Who is making the change, recorded in the audit trail.
    #[arg(short, long, global = true, default_value = "cli")]
    pub actor: String,

    /// Reason recorded in the audit trail.
    #[arg(short, long, global = true)]
    pub reason: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show a week's assignments, taught periods and conflicts
    Show {
        /// Week number (1-based)
        week: u32,
    },

    /// Check an assignment without saving it
    Check {
        /// Week number (1-based)
        week: u32,
        /// Teacher id
        teacher: String,
        /// Assignment, e.g. "Toán: 6A1, 6A2; Tin: 7A1"
        text: String,
    },

    /// Save a teacher's assignment for a week (empty text clears it)
    Assign {
        /// Week number (1-based)
        week: u32,
        /// Teacher id
        teacher: String,
        /// Assignment, e.g. "Toán: 6A1, 6A2; Tin: 7A1"
        text: String,
    },

    /// Record the periods a teacher actually taught in a week
    Actual {
        /// Week number (1-based)
        week: u32,
        /// Teacher id
        teacher: String,
        /// Periods taught
        periods: f64,
    },

    /// Copy selected teachers' assignments into a week
    Copy {
        /// Week to copy into
        #[arg(long)]
        to: u32,
        /// Week to copy from (defaults to the week before `--to`)
        #[arg(long)]
        from: Option<u32>,
        /// Teacher ids to copy
        #[arg(required = true)]
        teachers: Vec<String>,
    },

    /// Show the periods derived from a teacher's saved assignment
    Periods {
        /// Week number (1-based)
        week: u32,
        /// Teacher id
        teacher: String,
    },

    /// Show quota balances over weeks 1..=N
    Balance {
        /// Number of weeks to aggregate
        #[arg(short, long)]
        weeks: u32,
        /// Only this teacher
        teacher: Option<String>,
    },

    /// Manage teachers
    Teacher {
        #[command(subcommand)]
        command: TeacherCommand,
    },

    /// Manage roles and their quota reductions
    Role {
        #[command(subcommand)]
        command: RoleCommand,
    },

    /// Manage the subject-period table
    Subject {
        #[command(subcommand)]
        command: SubjectCommand,
    },

    /// Set the standard weekly quota
    Quota {
        /// Periods per week
        quota: f64,
    },

    /// Set the grades accepted by the class format check
    Grades {
        /// Lowest accepted grade
        min: u32,
        /// Highest accepted grade
        max: u32,
    },

    /// Set how repeated classes in one assignment are totalled
    Policy {
        /// `count-as-written` or `deduplicate`
        policy: DuplicateClassPolicy,
    },

    /// Show the audit trail
    Audit {
        /// Maximum number of events to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
        /// Only events for this week
        #[arg(short, long)]
        week: Option<u32>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TeacherCommand {
    /// List teachers with their roles and weekly quota
    List,
    /// Add a teacher
    Add {
        /// Teacher id
        id: String,
        /// Display name
        name: String,
        /// Role names, comma separated
        #[arg(long, value_delimiter = ',')]
        roles: Vec<String>,
    },
    /// Rename a teacher
    Rename {
        /// Teacher id
        id: String,
        /// New display name
        name: String,
    },
    /// Replace a teacher's roles
    Roles {
        /// Teacher id
        id: String,
        /// Role names, comma separated (empty clears)
        #[arg(value_delimiter = ',')]
        roles: Vec<String>,
    },
    /// Remove a teacher and their weekly data
    Remove {
        /// Teacher id
        id: String,
    },
    /// Import teachers from a CSV file with columns id,name,roles
    Import {
        /// CSV file; roles are separated by `|`
        path: PathBuf,
        /// Only report what would be imported
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum RoleCommand {
    /// List roles
    List,
    /// Add a role
    Add {
        /// Role name
        name: String,
        /// Periods per week subtracted from the standard quota
        reduction: f64,
    },
    /// Rename a role
    Rename {
        /// Current role name or id
        role: String,
        /// New name
        name: String,
    },
    /// Change a role's reduction
    Reduce {
        /// Role name or id
        role: String,
        /// New reduction
        reduction: f64,
    },
    /// Remove a role
    Remove {
        /// Role name or id
        role: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SubjectCommand {
    /// List subjects with their periods per class
    List,
    /// Add a subject or change its periods per class
    Set {
        /// Subject name
        name: String,
        /// Periods per class per week
        periods: f64,
    },
    /// Remove a subject
    Remove {
        /// Subject name
        name: String,
    },
}
