// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Action names and week tagging carried into audit events.

use crate::command::Command;
use crate::tests::helpers::week;
use workload_domain::{DuplicateClassPolicy, RoleId, TeacherId, WeekNumber};

#[test]
fn test_week_scoped_commands_report_their_week() {
    let assignment = Command::SetAssignment {
        week: week(5),
        teacher_id: TeacherId::new("A"),
        text: String::from("Toán: 6A1"),
    };
    let actual = Command::SetActual {
        week: week(6),
        teacher_id: TeacherId::new("A"),
        periods: 19.0,
    };
    let copy = Command::CopySelected {
        source: week(2),
        target: week(7),
        teacher_ids: vec![TeacherId::new("A")],
    };

    assert_eq!(assignment.week(), Some(week(5)));
    assert_eq!(actual.week(), Some(week(6)));
    assert_eq!(copy.week(), Some(week(7)));
}

#[test]
fn test_directory_commands_have_no_week() {
    let commands: Vec<Command> = vec![
        Command::RemoveTeacher {
            id: TeacherId::new("A"),
        },
        Command::RemoveRole { id: RoleId::new(1) },
        Command::SetStandardQuota { quota: 19.0 },
        Command::SetGradeRange { min: 6, max: 9 },
        Command::SetDuplicateClassPolicy {
            policy: DuplicateClassPolicy::Deduplicate,
        },
    ];

    for command in commands {
        let no_week: Option<WeekNumber> = command.week();
        assert_eq!(no_week, None, "{}", command.name());
    }
}

#[test]
fn test_action_names_match_variants() {
    assert_eq!(
        Command::AddRole {
            name: String::from("X"),
            reduction: 1.0,
        }
        .name(),
        "AddRole"
    );
    assert_eq!(
        Command::SetSubjectPeriods {
            name: String::from("Tin"),
            periods: 1.0,
        }
        .name(),
        "SetSubjectPeriods"
    );
    assert_eq!(
        Command::CopySelected {
            source: week(1),
            target: week(2),
            teacher_ids: Vec::new(),
        }
        .name(),
        "CopySelected"
    );
    assert_eq!(
        Command::SetGradeRange { min: 1, max: 5 }.name(),
        "SetGradeRange"
    );
}
