// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{info, warn};

use super::{filter_from, list_options_from};
use crate::models::{Expense, ExpenseUpdate, NewExpense};
use crate::services;
use crate::utils::{align_right, fmt_amount, maybe_print_json, pretty_table};

pub fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from(sub, true);
    let opts = list_options_from(sub);
    let data = services::list_expenses(conn, &filter, &opts).context("List expenses")?;

    if data.is_empty() {
        warn!("list returned no expenses");
    } else {
        info!(count = data.len(), "listed expenses");
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", render_expenses(&data));
    }
    Ok(())
}

pub fn render_expenses(data: &[Expense]) -> String {
    if data.is_empty() {
        return "No expenses to display.".to_string();
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.to_string(),
                e.category.clone(),
                fmt_amount(e.amount),
                e.note.clone().unwrap_or_default(),
            ]
        })
        .collect();
    let mut t = pretty_table(&["ID", "Date", "Category", "Amount", "Note"], rows);
    align_right(&mut t, &[0, 3]);
    t.to_string()
}

pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let new = NewExpense {
        date: *sub.get_one::<NaiveDate>("date").context("--date is required")?,
        category: sub
            .get_one::<String>("category")
            .cloned()
            .context("--category is required")?,
        amount: *sub.get_one::<f64>("amount").context("--amount is required")?,
        note: sub.get_one::<String>("note").cloned(),
    };
    let id = services::add_expense(conn, &new).context("Add expense")?;
    info!(id, category = %new.category, amount = new.amount, "expense added");
    println!(
        "Recorded {} on {} in '{}' (ID = {})",
        fmt_amount(new.amount),
        new.date,
        new.category,
        id
    );
    Ok(())
}

pub fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("expense ID is required")?;
    let upd = ExpenseUpdate {
        date: sub.get_one::<NaiveDate>("date").copied(),
        category: sub.get_one::<String>("category").cloned(),
        amount: sub.get_one::<f64>("amount").copied(),
        note: sub.get_one::<String>("note").cloned(),
    };
    if upd.is_empty() {
        warn!(id, "update called with nothing to change");
        bail!("Nothing to update: pass at least one of --date, --category, --amount, --note");
    }

    let changed = services::update_expense(conn, id, &upd).context("Update expense")?;
    if changed == 0 {
        warn!(id, "no expense found to update");
        println!("No expense with ID {}.", id);
    } else {
        info!(id, rows = changed, "expense updated");
        println!("Updated {} row(s).", changed);
    }
    Ok(())
}

pub fn delete(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("expense ID is required")?;
    if !sub.get_flag("yes") {
        warn!(id, "delete called without --yes");
        bail!("Refusing to delete expense {} without --yes", id);
    }

    let changed = services::delete_expense(conn, id).context("Delete expense")?;
    if changed == 0 {
        warn!(id, "no expense found to delete");
        println!("No expense with ID {}.", id);
    } else {
        info!(id, rows = changed, "expense deleted");
        println!("Deleted {} row(s).", changed);
    }
    Ok(())
}
