// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, State, TransitionResult, apply};
use workload_audit::{Actor, Cause};
use workload_domain::{RoleId, Settings, TeacherId, WeekNumber};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("staff-123"), String::from("staff"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Weekly data entry"))
}

pub fn week(value: u32) -> WeekNumber {
    WeekNumber::new(value).unwrap()
}

pub fn run(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    apply(state, command, create_test_actor(), create_test_cause())
}

pub fn run_ok(state: &State, command: Command) -> State {
    run(state, command).unwrap().new_state
}

/// Default roles and subjects plus three teachers: A holds the homeroom
/// role (id 1), B and C hold none.
pub fn create_test_state() -> State {
    let mut state: State = State::with_defaults();
    state.settings = Settings::default();
    for (id, name, roles) in [
        ("A", "Nguyễn Văn A", vec![RoleId::new(1)]),
        ("B", "Trần Thị B", Vec::new()),
        ("C", "Lê Văn C", Vec::new()),
    ] {
        state = run_ok(
            &state,
            Command::AddTeacher {
                id: TeacherId::new(id),
                name: String::from(name),
                role_ids: roles,
            },
        );
    }
    state
}
