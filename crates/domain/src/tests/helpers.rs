// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Role, RoleId, SubjectConfig, Teacher, TeacherId, WeekNumber};

pub fn week(value: u32) -> WeekNumber {
    WeekNumber::new(value).unwrap()
}

pub fn create_test_teacher(id: &str, name: &str, role_ids: &[u32]) -> Teacher {
    Teacher::new(
        TeacherId::new(id),
        String::from(name),
        role_ids.iter().copied().map(RoleId::new).collect(),
    )
}

pub fn create_test_roles() -> Vec<Role> {
    vec![
        Role::new(RoleId::new(1), String::from("Chủ nhiệm"), 4.0),
        Role::new(RoleId::new(2), String::from("Tổ trưởng chuyên môn"), 3.0),
        Role::new(RoleId::new(3), String::from("Tổng phụ trách Đội"), 10.0),
    ]
}

pub fn create_test_subjects() -> Vec<SubjectConfig> {
    vec![
        SubjectConfig::new(String::from("Toán"), 4.0),
        SubjectConfig::new(String::from("Tin"), 1.0),
        SubjectConfig::new(String::from("Công nghệ"), 1.5),
    ]
}
