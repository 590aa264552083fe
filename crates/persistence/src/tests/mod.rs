// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

mod audit_trail_tests;

use crate::Persistence;
use workload::{Command, State, TransitionResult, apply};
use workload_audit::{Actor, Cause};
use workload_domain::{TeacherId, WeekNumber};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("staff-1"), String::from("staff"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Test request"))
}

pub fn week(value: u32) -> WeekNumber {
    WeekNumber::new(value).expect("valid week")
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn add_teacher(state: &State, id: &str, name: &str) -> TransitionResult {
    apply(
        state,
        Command::AddTeacher {
            id: TeacherId::new(id),
            name: String::from(name),
            role_ids: Vec::new(),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("AddTeacher should succeed")
}

pub fn set_actual(state: &State, week_number: u32, id: &str, periods: f64) -> TransitionResult {
    apply(
        state,
        Command::SetActual {
            week: week(week_number),
            teacher_id: TeacherId::new(id),
            periods,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .expect("SetActual should succeed")
}
