// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors raised by the query, mutation and report services.
///
/// "Nothing matched" is not an error: mutations report it as zero affected
/// rows and reports as an empty or absent result.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Caller-supplied sort key or pagination value is out of range.
    /// Raised before any statement reaches the database.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The SQLite round-trip failed (locked database, missing table, I/O).
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type TrackerResult<T> = std::result::Result<T, TrackerError>;
