// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod app;
mod args;
mod import;
mod render;

#[cfg(test)]
mod tests;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing::{error, info};
use workload_persistence::Persistence;

use crate::app::App;
use crate::args::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        Persistence::new_with_file(db_path)
            .wrap_err_with(|| format!("Failed to open {}", db_path.display()))?
    } else {
        info!("Using in-memory database; changes will not be kept");
        Persistence::new_in_memory().wrap_err("Failed to create in-memory database")?
    };

    let mut app: App = App::new(persistence, &args.actor, args.reason, args.json)?;
    match app.run(args.command) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(err) => {
            error!("{err:#}");
            Err(err)
        }
    }
}
