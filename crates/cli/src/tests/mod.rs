// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]


use crate::app::App;
use crate::args::{Args, CliCommand};
use clap::Parser;
use workload_persistence::Persistence;

pub fn create_test_app(json: bool) -> App {
    let persistence: Persistence = Persistence::new_in_memory().unwrap();
    App::new(persistence, "tester", None, json).unwrap()
}

/// Parses a command line the way `main` does, without the binary name.
pub fn parse(line: &[&str]) -> CliCommand {
    let mut argv: Vec<&str> = vec!["workload"];
    argv.extend_from_slice(line);
    Args::try_parse_from(argv).unwrap().command
}

/// Runs a command line against the app and returns its output.
pub fn run(app: &mut App, line: &[&str]) -> String {
    app.run(parse(line)).unwrap()
}
