// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::AppConfig;

pub const LOG_FILE: &str = "tracker.log";
pub const MAX_LOG_BYTES: u64 = 1_000_000;
pub const LOG_BACKUPS: usize = 5;

/// Append-only log file that rolls over to `<name>.1` .. `<name>.N` once
/// it would grow past `max_bytes`.
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: File,
    written: u64,
}

impl RotatingFile {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            backups,
            file,
            written,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", n));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.backups == 0 {
            self.file.set_len(0)?;
            self.written = 0;
            return Ok(());
        }
        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.backups).rev() {
            let src = self.backup_path(n);
            if src.exists() {
                fs::rename(&src, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))?;
        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Installs the global subscriber: a rotating file log, plus stderr output
/// when `debug` is set. `RUST_LOG` overrides the level.
pub fn init(config: &AppConfig) -> Result<()> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log dir {}", config.log_dir.display()))?;
    let log_path = config.log_dir.join(LOG_FILE);
    let file = RotatingFile::open(&log_path, MAX_LOG_BYTES, LOG_BACKUPS)
        .with_context(|| format!("Open log file {}", log_path.display()))?;

    let level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));
    let console_layer = config
        .debug
        .then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    // A subscriber may already be installed (e.g. several runs in one test binary).
    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_ok()
    {
        debug!(path = %log_path.display(), debug = config.debug, "logger configured");
    }
    Ok(())
}
