// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use crate::db;

pub const DB_ENV: &str = "EXPENSE_TRACKER_DB";
pub const LOG_DIR_ENV: &str = "EXPENSE_TRACKER_LOG_DIR";
pub const DEBUG_ENV: &str = "EXPENSE_TRACKER_DEBUG";

/// Runtime settings resolved once per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// Builds the config from top-level matches. `--db` and `--debug` also
    /// pick up their environment variables through clap; the log directory
    /// is only configurable through the environment.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let db_path = match m.get_one::<PathBuf>("db") {
            Some(p) => p.clone(),
            None => db::default_db_path()?,
        };
        let log_dir = match std::env::var_os(LOG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => db::project_dirs()?.data_local_dir().join("logs"),
        };
        Ok(Self {
            db_path,
            log_dir,
            debug: m.get_flag("debug"),
        })
    }
}
