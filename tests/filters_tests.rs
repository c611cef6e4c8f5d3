// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use expense_tracker::filters::{list_clause, range_clause, report_clause};
use expense_tracker::models::ExpenseFilter;
use rusqlite::types::Value;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn empty_filter_matches_everything() {
    let clause = list_clause(&ExpenseFilter::default());
    assert!(clause.is_empty());
    assert!(clause.params.is_empty());
    assert_eq!(clause.to_sql(), "");
}

#[test]
fn one_fragment_per_present_filter() {
    // Every subset of {date_from, date_to, min, max, text}.
    for mask in 0u8..32 {
        let filter = ExpenseFilter {
            date_from: (mask & 1 != 0).then(|| d("2024-01-01")),
            date_to: (mask & 2 != 0).then(|| d("2024-12-31")),
            category: None,
            min_amount: (mask & 4 != 0).then_some(5.0),
            max_amount: (mask & 8 != 0).then_some(50.0),
            text: (mask & 16 != 0).then(|| "cafe".to_string()),
        };
        let clause = report_clause(&filter);
        let present = mask.count_ones() as usize;
        let text_binds = usize::from(mask & 16 != 0);
        assert_eq!(clause.fragments.len(), present, "mask {:05b}", mask);
        assert_eq!(clause.params.len(), present + text_binds, "mask {:05b}", mask);
    }
}

#[test]
fn fragments_keep_order_and_bind_values() {
    let filter = ExpenseFilter {
        date_from: Some(d("2024-01-01")),
        date_to: Some(d("2024-01-31")),
        category: Some("Food".into()),
        min_amount: Some(1.5),
        max_amount: Some(99.0),
        text: Some("lunch".into()),
    };
    let clause = list_clause(&filter);
    assert_eq!(
        clause.fragments,
        vec![
            "date >= ?",
            "date <= ?",
            "category = ?",
            "amount >= ?",
            "amount <= ?",
            "(note LIKE ? OR category LIKE ?)",
        ]
    );
    assert_eq!(
        clause.params,
        vec![
            Value::Text("2024-01-01".into()),
            Value::Text("2024-01-31".into()),
            Value::Text("Food".into()),
            Value::Real(1.5),
            Value::Real(99.0),
            Value::Text("%lunch%".into()),
            Value::Text("%lunch%".into()),
        ]
    );
    assert!(clause.to_sql().starts_with(" WHERE date >= ? AND date <= ?"));
}

#[test]
fn report_clause_ignores_exact_category() {
    let filter = ExpenseFilter {
        category: Some("Food".into()),
        ..Default::default()
    };
    assert!(report_clause(&filter).is_empty());
    assert_eq!(list_clause(&filter).fragments, vec!["category = ?"]);
}

#[test]
fn blank_text_adds_nothing() {
    let filter = ExpenseFilter {
        text: Some(String::new()),
        ..Default::default()
    };
    assert!(list_clause(&filter).is_empty());
}

#[test]
fn hostile_text_stays_out_of_sql() {
    let filter = ExpenseFilter {
        text: Some("'; DROP TABLE expenses; --".into()),
        ..Default::default()
    };
    let clause = list_clause(&filter);
    assert!(!clause.to_sql().contains("DROP"));
    assert_eq!(
        clause.params[0],
        Value::Text("%'; DROP TABLE expenses; --%".into())
    );
}

#[test]
fn range_clause_always_starts_with_window() {
    let filter = ExpenseFilter {
        date_from: Some(d("2000-01-01")),
        category: Some("Food".into()),
        max_amount: Some(10.0),
        ..Default::default()
    };
    let clause = range_clause(d("2024-02-01"), d("2024-02-29"), &filter);
    assert_eq!(clause.fragments, vec!["date BETWEEN ? AND ?", "amount <= ?"]);
    assert_eq!(
        clause.params,
        vec![
            Value::Text("2024-02-01".into()),
            Value::Text("2024-02-29".into()),
            Value::Real(10.0),
        ]
    );
}
