// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_amount(s: &str) -> Result<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .with_context(|| format!("Amount must be numeric, got '{}'", s))?;
    if !v.is_finite() || v <= 0.0 {
        bail!("Amount must be > 0, got '{}'", s);
    }
    Ok(v)
}

/// Bounds for `--min`/`--max`; any finite number is accepted.
pub fn parse_bound(s: &str) -> Result<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid amount bound '{}'", s))?;
    if !v.is_finite() {
        bail!("Amount bound must be finite, got '{}'", s);
    }
    Ok(v)
}

pub fn parse_category(s: &str) -> Result<String> {
    let out = s.trim();
    if out.is_empty() {
        return Err(anyhow!("Category cannot be empty"));
    }
    Ok(out.to_string())
}

pub fn parse_id(s: &str) -> Result<i64> {
    let id: i64 = s
        .trim()
        .parse()
        .with_context(|| format!("ID must be an integer, got '{}'", s))?;
    if id <= 0 {
        bail!("ID must be > 0, got {}", id);
    }
    Ok(id)
}

pub fn fmt_amount(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Right-aligns the given columns, for amounts and counts.
pub fn align_right(t: &mut Table, columns: &[usize]) {
    for idx in columns {
        if let Some(col) = t.column_mut(*idx) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
