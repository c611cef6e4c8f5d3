// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{info, warn};

use super::filter_from;
use crate::models::{CategoryTotal, RangeSummary};
use crate::reports;
use crate::utils::{align_right, fmt_amount, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("category", sub)) => by_category(conn, sub)?,
        Some(("range", sub)) => range(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from(sub, false);
    let mut data = reports::by_category(conn, &filter).context("Report by category")?;
    if let Some(top) = sub.get_one::<u64>("top") {
        data.truncate(usize::try_from(*top).unwrap_or(usize::MAX));
    }

    if data.is_empty() {
        warn!("report by category returned nothing");
    } else {
        info!(rows = data.len(), "report by category generated");
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", render_by_category(&data));
    }
    Ok(())
}

pub fn render_by_category(data: &[CategoryTotal]) -> String {
    if data.is_empty() {
        return "No data to report.".to_string();
    }
    let rows = data
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_amount(c.total),
                c.count.to_string(),
                format!("{:.1}", c.pct_total),
            ]
        })
        .collect();
    let mut t = pretty_table(&["Category", "Total", "Count", "%"], rows);
    align_right(&mut t, &[1, 2, 3]);
    t.to_string()
}

fn range(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let from = *sub.get_one::<NaiveDate>("from").context("--from is required")?;
    let to = *sub.get_one::<NaiveDate>("to").context("--to is required")?;
    let filter = filter_from(sub, false);
    let summary = reports::range_summary(conn, from, to, &filter).context("Report range")?;

    match &summary {
        Some(s) => info!(count = s.count, total = s.total, %from, %to, "range report generated"),
        None => warn!(%from, %to, "range report returned nothing"),
    }
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        println!("{}", render_range(summary.as_ref()));
    }
    Ok(())
}

pub fn render_range(summary: Option<&RangeSummary>) -> String {
    let Some(s) = summary else {
        return "No data to report within the given range.".to_string();
    };
    let mut t = pretty_table(
        &["Total", "Count", "Average"],
        vec![vec![fmt_amount(s.total), s.count.to_string(), fmt_amount(s.avg)]],
    );
    align_right(&mut t, &[0, 1, 2]);
    t.to_string()
}
