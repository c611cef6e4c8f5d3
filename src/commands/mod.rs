// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod expenses;
pub mod exporter;
pub mod reports;

use chrono::NaiveDate;

use crate::models::{ExpenseFilter, ListOptions};

/// Reads the filter flags of a read command. `--category` only exists on
/// `list` and `export`.
pub fn filter_from(sub: &clap::ArgMatches, with_category: bool) -> ExpenseFilter {
    ExpenseFilter {
        date_from: sub.get_one::<NaiveDate>("from").copied(),
        date_to: sub.get_one::<NaiveDate>("to").copied(),
        category: if with_category {
            sub.get_one::<String>("category").cloned()
        } else {
            None
        },
        min_amount: sub.get_one::<f64>("min").copied(),
        max_amount: sub.get_one::<f64>("max").copied(),
        text: sub.get_one::<String>("text").cloned(),
    }
}

pub fn list_options_from(sub: &clap::ArgMatches) -> ListOptions {
    ListOptions {
        order_by: sub.get_one::<String>("order_by").cloned(),
        descending: sub.get_flag("desc"),
        limit: sub.get_one::<i64>("limit").copied(),
        offset: sub.get_one::<i64>("offset").copied(),
    }
}
