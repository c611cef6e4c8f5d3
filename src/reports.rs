// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::{Connection, params_from_iter};
use tracing::debug;

use crate::error::TrackerResult;
use crate::filters::{range_clause, report_clause};
use crate::models::{CategoryTotal, ExpenseFilter, RangeSummary};

/// Spend per category with each category's share of the grand total.
///
/// Ordered by total descending, then category name. Returns an empty list
/// when nothing matches or the grand total is zero. The exact-category
/// filter does not apply here.
pub fn by_category(conn: &Connection, filter: &ExpenseFilter) -> TrackerResult<Vec<CategoryTotal>> {
    let clause = report_clause(filter);
    let sql = format!(
        "SELECT category, SUM(amount) AS total, COUNT(*) AS count FROM expenses{} \
         GROUP BY category ORDER BY total DESC, category ASC",
        clause.to_sql()
    );
    debug!(%sql, "report by category");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(clause.params.iter()), |r| {
        Ok((
            r.get::<_, String>("category")?,
            r.get::<_, Option<f64>>("total")?.unwrap_or(0.0),
            r.get::<_, i64>("count")?,
        ))
    })?;
    let mut groups = Vec::new();
    for row in rows {
        groups.push(row?);
    }

    let grand_total: f64 = groups.iter().map(|(_, total, _)| total).sum();
    if groups.is_empty() || grand_total == 0.0 {
        return Ok(Vec::new());
    }

    Ok(groups
        .into_iter()
        .map(|(category, total, count)| CategoryTotal {
            category,
            total,
            count,
            pct_total: total / grand_total * 100.0,
        })
        .collect())
}

/// Total, count and mean amount inside the inclusive window
/// `date_from..=date_to`, narrowed by the filter's amount and text bounds.
///
/// `None` means no expense matched.
pub fn range_summary(
    conn: &Connection,
    date_from: NaiveDate,
    date_to: NaiveDate,
    filter: &ExpenseFilter,
) -> TrackerResult<Option<RangeSummary>> {
    let clause = range_clause(date_from, date_to, filter);
    let sql = format!(
        "SELECT SUM(amount) AS total, COUNT(*) AS count, AVG(amount) AS avg FROM expenses{}",
        clause.to_sql()
    );
    debug!(%sql, "report range");

    let (total, count, avg) = conn.query_row(&sql, params_from_iter(clause.params.iter()), |r| {
        Ok((
            r.get::<_, Option<f64>>("total")?,
            r.get::<_, i64>("count")?,
            r.get::<_, Option<f64>>("avg")?,
        ))
    })?;
    if count == 0 {
        return Ok(None);
    }
    Ok(Some(RangeSummary {
        total: total.unwrap_or(0.0),
        count,
        avg: avg.unwrap_or(0.0),
    }))
}
