// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::TrackerError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub note: Option<String>,
}

/// Fields to overwrite on an existing expense; `None` leaves a column as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub note: Option<String>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.category.is_none() && self.amount.is_none() && self.note.is_none()
    }
}

/// Optional criteria narrowing a listing or report. Present fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Exact match; honoured by listing and export only.
    pub category: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    /// Substring searched in both note and category.
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    pub order_by: Option<String>,
    pub descending: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Amount,
    Date,
    Category,
    Id,
}

impl SortKey {
    pub const NAMES: [&'static str; 4] = ["amount", "date", "category", "id"];

    pub fn column(self) -> &'static str {
        match self {
            SortKey::Amount => "amount",
            SortKey::Date => "date",
            SortKey::Category => "category",
            SortKey::Id => "id",
        }
    }
}

impl FromStr for SortKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amount" => Ok(SortKey::Amount),
            "date" => Ok(SortKey::Date),
            "category" => Ok(SortKey::Category),
            "id" => Ok(SortKey::Id),
            other => Err(TrackerError::InvalidArgument(format!(
                "unknown sort column '{}' (expected one of: {})",
                other,
                SortKey::NAMES.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: i64,
    pub pct_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSummary {
    pub total: f64,
    pub count: i64,
    pub avg: f64,
}
