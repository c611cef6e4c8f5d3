// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("org", "ExpenseTracker", "expense-tracker"));

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")
}

/// Default database location inside the platform data directory.
pub fn default_db_path() -> Result<PathBuf> {
    let proj = project_dirs()?;
    Ok(proj.data_dir().join("expenses.sqlite"))
}

/// Opens the database at `path`, creating parent directories and the
/// schema when missing. Lock conflicts fail immediately instead of waiting
/// on SQLite's busy handler.
pub fn open_or_init(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data dir {}", parent.display()))?;
    }
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    conn.busy_timeout(Duration::ZERO)
        .context("Failed to disable busy timeout")?;
    debug!(path = %path.display(), "database opened");
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS expenses(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL, -- YYYY-MM-DD
        category TEXT NOT NULL,
        amount REAL NOT NULL,
        note TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
    CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);
    "#,
    )
    .context("Failed to create expenses schema")?;
    info!("expenses schema ready");
    Ok(())
}
