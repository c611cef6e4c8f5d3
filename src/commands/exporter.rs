// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{filter_from, list_options_from};
use crate::models::Expense;
use crate::services;

pub const EXPORT_FIELDS: [&str; 5] = ["id", "date", "category", "amount", "note"];

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .context("--format is required")?
        .to_lowercase();
    let dest = sub
        .get_one::<PathBuf>("dest")
        .context("--dest is required")?;
    let fields = parse_fields(sub.get_one::<String>("fields").map(String::as_str))?;
    let overwrite = sub.get_flag("force");
    let pretty = sub.get_flag("pretty");

    let filter = filter_from(sub, true);
    let opts = list_options_from(sub);
    let rows = services::list_expenses(conn, &filter, &opts).context("Query expenses for export")?;

    match fmt.as_str() {
        "csv" => {
            if pretty {
                warn!("--pretty ignored for CSV export");
                eprintln!("Warning: --pretty is ignored for CSV files");
            }
            write_csv(&rows, dest, &fields, overwrite)?;
        }
        "json" => write_json(&rows, dest, &fields, overwrite, pretty)?,
        other => bail!("Unknown format: {} (use csv|json)", other),
    }

    if rows.is_empty() {
        warn!(dest = %dest.display(), format = %fmt, "exported an empty result");
    } else {
        info!(rows = rows.len(), dest = %dest.display(), format = %fmt, "export finished");
    }
    println!("Exported {} row(s) to {}", rows.len(), dest.display());
    Ok(())
}

/// Parses `--fields`. `None` selects every column in table order.
pub fn parse_fields(raw: Option<&str>) -> Result<Vec<String>> {
    let Some(raw) = raw else {
        return Ok(EXPORT_FIELDS.iter().map(|f| f.to_string()).collect());
    };
    let fields: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();
    if fields.is_empty() {
        bail!("--fields cannot be empty");
    }
    let unknown: Vec<&str> = fields
        .iter()
        .map(String::as_str)
        .filter(|f| !EXPORT_FIELDS.contains(f))
        .collect();
    if !unknown.is_empty() {
        bail!(
            "Unknown export field(s): {} (allowed: {})",
            unknown.join(", "),
            EXPORT_FIELDS.join(", ")
        );
    }
    Ok(fields)
}

fn prepare_dest(dest: &Path, overwrite: bool) -> Result<()> {
    if dest.exists() && !overwrite {
        bail!(
            "{} already exists; pass --force to overwrite",
            dest.display()
        );
    }
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

fn field_value(e: &Expense, field: &str) -> Value {
    match field {
        "id" => json!(e.id),
        "date" => json!(e.date.to_string()),
        "category" => json!(e.category),
        "amount" => json!(e.amount),
        "note" => json!(e.note),
        _ => Value::Null,
    }
}

fn field_text(e: &Expense, field: &str) -> String {
    match field {
        "id" => e.id.to_string(),
        "date" => e.date.to_string(),
        "category" => e.category.clone(),
        // Same rendering as the JSON export: 10.0, not 10.
        "amount" => format!("{:?}", e.amount),
        "note" => e.note.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

pub fn write_csv(rows: &[Expense], dest: &Path, fields: &[String], overwrite: bool) -> Result<()> {
    prepare_dest(dest, overwrite)?;
    let mut wtr = csv::Writer::from_path(dest)
        .with_context(|| format!("Open {} for writing", dest.display()))?;
    wtr.write_record(fields)?;
    for e in rows {
        wtr.write_record(fields.iter().map(|f| field_text(e, f)))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(
    rows: &[Expense],
    dest: &Path,
    fields: &[String],
    overwrite: bool,
    pretty: bool,
) -> Result<()> {
    prepare_dest(dest, overwrite)?;
    let items: Vec<Value> = rows
        .iter()
        .map(|e| {
            let obj: Map<String, Value> = fields
                .iter()
                .map(|f| (f.clone(), field_value(e, f)))
                .collect();
            Value::Object(obj)
        })
        .collect();
    let body = if pretty {
        serde_json::to_string_pretty(&items)?
    } else {
        serde_json::to_string(&items)?
    };
    fs::write(dest, body).with_context(|| format!("Write {}", dest.display()))?;
    Ok(())
}
