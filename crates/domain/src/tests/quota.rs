// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::defaults::MAX_BALANCE_WEEKS;
use crate::tests::helpers::{create_test_roles, create_test_subjects, create_test_teacher, week};
use crate::{
    DomainError, Role, RoleId, Settings, SubjectPeriodTable, Teacher, WeeklyActuals,
    WeeklyAssignments, WeeklySnapshotStore, WorkloadBalance, aggregate_all, aggregate_balance,
    effective_weekly_quota, resolve_role_names, total_reduction, unique_role_ids,
};

fn homeroom_settings() -> Settings {
    Settings {
        standard_quota: 19.0,
        ..Settings::default()
    }
}

#[test]
fn test_homeroom_role_reduces_quota_to_fifteen() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[1]);

    assert_eq!(
        effective_weekly_quota(&teacher, 19.0, &create_test_roles()),
        15.0
    );
}

#[test]
fn test_effective_quota_never_negative() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[1, 2, 3]);

    assert_eq!(total_reduction(&teacher, &create_test_roles()), 17.0);
    assert_eq!(
        effective_weekly_quota(&teacher, 10.0, &create_test_roles()),
        0.0
    );
    assert_eq!(
        effective_weekly_quota(&teacher, 0.0, &create_test_roles()),
        0.0
    );
}

#[test]
fn test_unresolved_role_contributes_zero() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[1, 42]);

    assert_eq!(total_reduction(&teacher, &create_test_roles()), 4.0);
}

#[test]
fn test_renamed_role_stays_attached() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[1]);
    let mut roles: Vec<Role> = create_test_roles();
    roles[0].name = String::from("GVCN");

    assert_eq!(effective_weekly_quota(&teacher, 19.0, &roles), 15.0);
}

#[test]
fn test_four_week_balance_scenario() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[1]);
    let mut actuals: WeeklyActuals = WeeklyActuals::new();
    actuals.set(week(1), teacher.id.clone(), 15.0);
    actuals.set(week(2), teacher.id.clone(), 15.0);
    actuals.set(week(4), teacher.id.clone(), 15.0);

    let balance: WorkloadBalance = aggregate_balance(
        &teacher,
        4,
        &WeeklyAssignments::new(),
        &actuals,
        &SubjectPeriodTable::new(&create_test_subjects()),
        &homeroom_settings(),
        &create_test_roles(),
    )
    .unwrap();

    assert_eq!(balance.reduction, 4.0);
    assert_eq!(balance.effective_weekly_quota, 15.0);
    assert_eq!(balance.total_quota, 60.0);
    assert_eq!(balance.total_actual, 45.0);
    assert_eq!(balance.balance, -15.0);
    assert_eq!(balance.weeks.len(), 4);
    assert_eq!(balance.weeks[2].actual, 0.0);
}

#[test]
fn test_balance_ignores_weeks_beyond_range() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[]);
    let mut actuals: WeeklyActuals = WeeklyActuals::new();
    actuals.set(week(1), teacher.id.clone(), 20.0);
    actuals.set(week(3), teacher.id.clone(), 50.0);

    let balance: WorkloadBalance = aggregate_balance(
        &teacher,
        2,
        &WeeklyAssignments::new(),
        &actuals,
        &SubjectPeriodTable::default(),
        &homeroom_settings(),
        &[],
    )
    .unwrap();

    assert_eq!(balance.total_quota, 38.0);
    assert_eq!(balance.total_actual, 20.0);
    assert_eq!(balance.balance, -18.0);
}

#[test]
fn test_surplus_is_positive_balance() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[]);
    let mut actuals: WeeklyActuals = WeeklyActuals::new();
    actuals.set(week(1), teacher.id.clone(), 21.5);

    let balance: WorkloadBalance = aggregate_balance(
        &teacher,
        1,
        &WeeklyAssignments::new(),
        &actuals,
        &SubjectPeriodTable::default(),
        &homeroom_settings(),
        &[],
    )
    .unwrap();

    assert_eq!(balance.balance, 2.5);
}

#[test]
fn test_zero_weeks_yields_zero_totals() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[]);

    let balance: WorkloadBalance = aggregate_balance(
        &teacher,
        0,
        &WeeklyAssignments::new(),
        &WeeklyActuals::new(),
        &SubjectPeriodTable::default(),
        &homeroom_settings(),
        &[],
    )
    .unwrap();

    assert_eq!(balance.total_quota, 0.0);
    assert_eq!(balance.balance, 0.0);
    assert!(balance.weeks.is_empty());
}

#[test]
fn test_week_lines_report_assigned_periods() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[]);
    let mut assignments: WeeklyAssignments = WeeklyAssignments::new();
    assignments.set(
        week(2),
        teacher.id.clone(),
        String::from("Toán: 6A1, 6A2; Tin: 7A1"),
    );

    let balance: WorkloadBalance = aggregate_balance(
        &teacher,
        2,
        &assignments,
        &WeeklyActuals::new(),
        &SubjectPeriodTable::new(&create_test_subjects()),
        &homeroom_settings(),
        &[],
    )
    .unwrap();

    assert_eq!(balance.weeks[0].assigned_periods, 0.0);
    assert_eq!(balance.weeks[1].assigned_periods, 9.0);
    assert_eq!(balance.weeks[1].week, week(2));
}

#[test]
fn test_aggregate_all_follows_directory_order() {
    let teachers: Vec<Teacher> = vec![
        create_test_teacher("T2", "Trần Thị B", &[]),
        create_test_teacher("T1", "Nguyễn Văn A", &[1]),
    ];

    let balances: Vec<WorkloadBalance> = aggregate_all(
        &teachers,
        1,
        &WeeklyAssignments::new(),
        &WeeklyActuals::new(),
        &SubjectPeriodTable::default(),
        &homeroom_settings(),
        &create_test_roles(),
    )
    .unwrap();

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].teacher_id.value(), "T2");
    assert_eq!(balances[0].effective_weekly_quota, 19.0);
    assert_eq!(balances[1].effective_weekly_quota, 15.0);
}

#[test]
fn test_resolve_role_names_drops_unknown_names() {
    let ids: Vec<RoleId> = resolve_role_names(
        &["chủ nhiệm", "Unknown role", " Tổng phụ trách Đội "],
        &create_test_roles(),
    );

    assert_eq!(ids, vec![RoleId::new(1), RoleId::new(3)]);
}

#[test]
fn test_repeated_role_reduces_quota_once() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[1, 1]);

    assert_eq!(total_reduction(&teacher, &create_test_roles()), 4.0);
    assert_eq!(
        effective_weekly_quota(&teacher, 19.0, &create_test_roles()),
        15.0
    );
}

#[test]
fn test_resolve_role_names_returns_each_role_once() {
    let ids: Vec<RoleId> = resolve_role_names(
        &["Chủ nhiệm", "chủ nhiệm ", "Tổng phụ trách Đội"],
        &create_test_roles(),
    );

    assert_eq!(ids, vec![RoleId::new(1), RoleId::new(3)]);
}

#[test]
fn test_unique_role_ids_keeps_first_seen_order() {
    let ids: Vec<RoleId> = unique_role_ids([3, 1, 3, 2, 1].map(RoleId::new));

    assert_eq!(ids, vec![RoleId::new(3), RoleId::new(1), RoleId::new(2)]);
}

#[test]
fn test_balance_rejects_unbounded_week_count() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[]);

    let result: Result<WorkloadBalance, DomainError> = aggregate_balance(
        &teacher,
        u32::MAX,
        &WeeklyAssignments::new(),
        &WeeklyActuals::new(),
        &SubjectPeriodTable::default(),
        &homeroom_settings(),
        &[],
    );

    assert_eq!(
        result,
        Err(DomainError::WeekCountTooLarge {
            requested: u32::MAX,
            max: MAX_BALANCE_WEEKS,
        })
    );
}

#[test]
fn test_balance_accepts_maximum_week_count() {
    let teacher: Teacher = create_test_teacher("T1", "Nguyễn Văn A", &[]);

    let balances: Vec<WorkloadBalance> = aggregate_all(
        &[teacher],
        MAX_BALANCE_WEEKS,
        &WeeklyAssignments::new(),
        &WeeklyActuals::new(),
        &SubjectPeriodTable::default(),
        &homeroom_settings(),
        &[],
    )
    .unwrap();

    let too_long: Result<Vec<WorkloadBalance>, DomainError> = aggregate_all(
        &[],
        MAX_BALANCE_WEEKS + 1,
        &WeeklyAssignments::new(),
        &WeeklyActuals::new(),
        &SubjectPeriodTable::default(),
        &homeroom_settings(),
        &[],
    );

    assert_eq!(balances[0].weeks.len(), 520);
    assert!(too_long.is_err());
}
