// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::error;

use expense_tracker::{cli, commands, config::AppConfig, db, logging};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let config = AppConfig::from_matches(&matches)?;
    logging::init(&config)?;

    let result = run(&config, &matches);
    if let Err(err) = &result {
        error!(error = %format!("{:#}", err), "command failed");
    }
    result
}

fn run(config: &AppConfig, matches: &clap::ArgMatches) -> Result<()> {
    // Dropped at the end of this call on every path, closing the database.
    let conn = db::open_or_init(&config.db_path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", config.db_path.display());
        }
        Some(("list", sub)) => commands::expenses::list(&conn, sub)?,
        Some(("add", sub)) => commands::expenses::add(&conn, sub)?,
        Some(("update", sub)) => commands::expenses::update(&conn, sub)?,
        Some(("delete", sub)) => commands::expenses::delete(&conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
