// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Turns an [`ExpenseFilter`] into SQL condition fragments plus the values
//! bound to their placeholders. Filter values never end up in the SQL text.

use chrono::NaiveDate;
use rusqlite::types::Value;

use crate::models::ExpenseFilter;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub fragments: Vec<String>,
    pub params: Vec<Value>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// `" WHERE a AND b"`, or an empty string when there is nothing to filter.
    pub fn to_sql(&self) -> String {
        if self.fragments.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.fragments.join(" AND "))
        }
    }

    fn push(&mut self, fragment: &str, value: Value) {
        self.fragments.push(fragment.to_string());
        self.params.push(value);
    }

    fn push_bounds(&mut self, filter: &ExpenseFilter) {
        if let Some(min) = filter.min_amount {
            self.push("amount >= ?", Value::Real(min));
        }
        if let Some(max) = filter.max_amount {
            self.push("amount <= ?", Value::Real(max));
        }
        if let Some(text) = filter.text.as_deref().filter(|t| !t.is_empty()) {
            let like = format!("%{}%", text);
            self.fragments
                .push("(note LIKE ? OR category LIKE ?)".to_string());
            self.params.push(Value::Text(like.clone()));
            self.params.push(Value::Text(like));
        }
    }
}

/// Bind value for a date column, stored as `YYYY-MM-DD` text.
pub fn date_value(d: NaiveDate) -> Value {
    Value::Text(d.format("%Y-%m-%d").to_string())
}

fn build(filter: &ExpenseFilter, exact_category: bool) -> WhereClause {
    let mut clause = WhereClause::default();
    if let Some(from) = filter.date_from {
        clause.push("date >= ?", date_value(from));
    }
    if let Some(to) = filter.date_to {
        clause.push("date <= ?", date_value(to));
    }
    if exact_category {
        if let Some(cat) = &filter.category {
            clause.push("category = ?", Value::Text(cat.clone()));
        }
    }
    clause.push_bounds(filter);
    clause
}

/// Conditions for listing and export, including the exact category match.
pub fn list_clause(filter: &ExpenseFilter) -> WhereClause {
    build(filter, true)
}

/// Conditions for the by-category report. `filter.category` is ignored.
pub fn report_clause(filter: &ExpenseFilter) -> WhereClause {
    build(filter, false)
}

/// Conditions for the range summary: a mandatory inclusive date window
/// followed by the optional amount and text filters. The filter's own
/// date bounds and category are ignored.
pub fn range_clause(date_from: NaiveDate, date_to: NaiveDate, filter: &ExpenseFilter) -> WhereClause {
    let mut clause = WhereClause {
        fragments: vec!["date BETWEEN ? AND ?".to_string()],
        params: vec![date_value(date_from), date_value(date_to)],
    };
    clause.push_bounds(filter);
    clause
}
