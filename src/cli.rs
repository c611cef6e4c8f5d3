// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

use crate::config::{DB_ENV, DEBUG_ENV};
use crate::models::SortKey;
use crate::utils::{parse_amount, parse_bound, parse_category, parse_date, parse_id};

fn date_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name("YYYY-MM-DD")
        .value_parser(parse_date)
        .help(help)
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

/// Amount and text filters shared by every read command.
fn bound_args() -> [Arg; 3] {
    [
        Arg::new("min")
            .long("min")
            .value_parser(parse_bound)
            .allow_negative_numbers(true)
            .help("Minimum amount (inclusive)"),
        Arg::new("max")
            .long("max")
            .value_parser(parse_bound)
            .allow_negative_numbers(true)
            .help("Maximum amount (inclusive)"),
        Arg::new("text")
            .long("text")
            .help("Substring to search in note or category"),
    ]
}

fn window_args() -> [Arg; 2] {
    [
        date_arg("from", "from", "Start date (inclusive)"),
        date_arg("to", "to", "End date (inclusive)"),
    ]
}

fn listing_args() -> Vec<Arg> {
    let mut args: Vec<Arg> = window_args().into();
    args.push(
        Arg::new("category")
            .long("category")
            .value_parser(parse_category)
            .help("Exact category match"),
    );
    args.extend(bound_args());
    args.extend([
        Arg::new("order_by")
            .long("order-by")
            .value_parser(SortKey::NAMES)
            .help("Column to order by"),
        Arg::new("desc")
            .long("desc")
            .action(ArgAction::SetTrue)
            .help("Sort descending"),
        Arg::new("limit")
            .long("limit")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .help("Maximum number of rows"),
        Arg::new("offset")
            .long("offset")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .help("Rows to skip (requires --limit)"),
    ]);
    args
}

pub fn build_cli() -> Command {
    Command::new("expense-tracker")
        .about("Record, filter, report and export personal expenses")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the SQLite database file"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .env(DEBUG_ENV)
                .action(ArgAction::SetTrue)
                .help("Verbose logging, also echoed to stderr"),
        )
        .subcommand(Command::new("init").about("Create the database schema"))
        .subcommand(
            Command::new("list")
                .about("List expenses with optional filters")
                .args(listing_args())
                .args(json_args()),
        )
        .subcommand(
            Command::new("add")
                .about("Record a new expense")
                .arg(date_arg("date", "date", "Expense date").required(true))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .required(true)
                        .value_parser(parse_category),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .value_parser(parse_amount)
                        .help("Amount (> 0)"),
                )
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            Command::new("update")
                .about("Change fields of an existing expense")
                .arg(Arg::new("id").required(true).value_parser(parse_id))
                .arg(date_arg("date", "date", "New date"))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_parser(parse_category),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .value_parser(parse_amount)
                        .help("Amount (> 0)"),
                )
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete an expense by ID")
                .arg(Arg::new("id").required(true).value_parser(parse_id))
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm deletion"),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregate reports")
                .subcommand_required(true)
                .subcommand(
                    Command::new("category")
                        .about("Totals and share per category")
                        .args(window_args())
                        .args(bound_args())
                        .arg(
                            Arg::new("top")
                                .long("top")
                                .value_parser(value_parser!(u64).range(1..))
                                .help("Only show the N biggest categories"),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("range")
                        .about("Total, count and average for a date range")
                        .args(window_args().map(|a| a.required(true)))
                        .args(bound_args())
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write filtered expenses to a CSV or JSON file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .value_parser(["csv", "json"]),
                )
                .arg(
                    Arg::new("dest")
                        .long("dest")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Destination file"),
                )
                .args(listing_args())
                .arg(
                    Arg::new("fields")
                        .long("fields")
                        .help("Comma-separated columns: id,date,category,amount,note"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Overwrite the destination if it exists"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Indent JSON output"),
                ),
        )
}
