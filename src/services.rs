// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::types::Value;
use rusqlite::{Connection, Row, params, params_from_iter};
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::filters::{date_value, list_clause};
use crate::models::{Expense, ExpenseFilter, ExpenseUpdate, ListOptions, NewExpense, SortKey};

const SELECT_EXPENSES: &str = "SELECT id, date, category, amount, note FROM expenses";

fn expense_from_row(r: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: r.get("id")?,
        date: r.get("date")?,
        category: r.get("category")?,
        amount: r.get("amount")?,
        note: r.get("note")?,
    })
}

/// Lists expenses matching `filter`, optionally sorted and paginated.
///
/// Sort key and pagination are validated before the database is touched.
/// `offset` only applies together with `limit`.
pub fn list_expenses(
    conn: &Connection,
    filter: &ExpenseFilter,
    opts: &ListOptions,
) -> TrackerResult<Vec<Expense>> {
    let order = opts
        .order_by
        .as_deref()
        .map(str::parse::<SortKey>)
        .transpose()?;
    if let Some(limit) = opts.limit {
        if limit <= 0 {
            return Err(TrackerError::InvalidArgument(format!(
                "limit must be a positive integer, got {}",
                limit
            )));
        }
        if let Some(offset) = opts.offset {
            if offset < 0 {
                return Err(TrackerError::InvalidArgument(format!(
                    "offset must be a non-negative integer, got {}",
                    offset
                )));
            }
        }
    }

    let clause = list_clause(filter);
    let mut sql = format!("{}{}", SELECT_EXPENSES, clause.to_sql());
    let mut values = clause.params;
    if let Some(key) = order {
        sql.push_str(&format!(
            " ORDER BY {} {}",
            key.column(),
            if opts.descending { "DESC" } else { "ASC" }
        ));
    }
    if let Some(limit) = opts.limit {
        sql.push_str(" LIMIT ?");
        values.push(Value::Integer(limit));
        if let Some(offset) = opts.offset {
            sql.push_str(" OFFSET ?");
            values.push(Value::Integer(offset));
        }
    }
    debug!(%sql, binds = values.len(), "list expenses");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), expense_from_row)?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn add_expense(conn: &Connection, new: &NewExpense) -> TrackerResult<i64> {
    conn.execute(
        "INSERT INTO expenses(date, category, amount, note) VALUES (?1, ?2, ?3, ?4)",
        params![new.date, new.category, new.amount, new.note],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrites the provided fields of expense `id`.
///
/// Returns the number of rows changed: 0 when nothing was provided or no
/// expense has that id.
pub fn update_expense(conn: &Connection, id: i64, upd: &ExpenseUpdate) -> TrackerResult<usize> {
    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();
    if let Some(date) = upd.date {
        sets.push("date = ?");
        values.push(date_value(date));
    }
    if let Some(category) = &upd.category {
        sets.push("category = ?");
        values.push(Value::Text(category.clone()));
    }
    if let Some(amount) = upd.amount {
        sets.push("amount = ?");
        values.push(Value::Real(amount));
    }
    if let Some(note) = &upd.note {
        sets.push("note = ?");
        values.push(Value::Text(note.clone()));
    }
    if sets.is_empty() {
        return Ok(0);
    }
    values.push(Value::Integer(id));

    let sql = format!("UPDATE expenses SET {} WHERE id = ?", sets.join(", "));
    debug!(%sql, id, "update expense");
    let changed = conn.execute(&sql, params_from_iter(values.iter()))?;
    Ok(changed)
}

pub fn delete_expense(conn: &Connection, id: i64) -> TrackerResult<usize> {
    let changed = conn.execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
    Ok(changed)
}
