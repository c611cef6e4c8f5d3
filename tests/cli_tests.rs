// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use assert_cmd::Command;
use chrono::NaiveDate;
use expense_tracker::{cli, commands, utils};
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

#[test]
fn primitive_parsers_validate_input() {
    assert_eq!(
        utils::parse_date("2024-02-29").unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert!(utils::parse_date("2023-02-29").is_err());
    assert!(utils::parse_date("15/01/2024").is_err());

    assert_eq!(utils::parse_amount("42.50").unwrap(), 42.5);
    assert!(utils::parse_amount("0").is_err());
    assert!(utils::parse_amount("-1").is_err());
    assert!(utils::parse_amount("NaN").is_err());
    assert!(utils::parse_amount("ten").is_err());

    assert_eq!(utils::parse_category("  Food ").unwrap(), "Food");
    assert!(utils::parse_category("   ").is_err());

    assert_eq!(utils::parse_id("7").unwrap(), 7);
    assert!(utils::parse_id("0").is_err());
    assert!(utils::parse_id("x").is_err());
}

#[test]
fn list_flags_become_filter_and_options() {
    let matches = cli::build_cli().get_matches_from([
        "expense-tracker",
        "list",
        "--from",
        "2024-01-01",
        "--category",
        " Food ",
        "--min",
        "-5",
        "--text",
        "lunch",
        "--order-by",
        "amount",
        "--desc",
        "--limit",
        "10",
        "--offset",
        "20",
    ]);
    let Some(("list", sub)) = matches.subcommand() else {
        panic!("no list subcommand");
    };
    let filter = commands::filter_from(sub, true);
    assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(filter.date_to, None);
    assert_eq!(filter.category.as_deref(), Some("Food"));
    assert_eq!(filter.min_amount, Some(-5.0));
    assert_eq!(filter.text.as_deref(), Some("lunch"));

    let opts = commands::list_options_from(sub);
    assert_eq!(opts.order_by.as_deref(), Some("amount"));
    assert!(opts.descending);
    assert_eq!(opts.limit, Some(10));
    assert_eq!(opts.offset, Some(20));
}

#[test]
fn parser_rejects_bad_values() {
    let bad: [&[&str]; 5] = [
        &["expense-tracker", "add", "--date", "2024-13-01", "--category", "Food", "--amount", "1"],
        &["expense-tracker", "add", "--date", "2024-01-01", "--category", "Food", "--amount", "0"],
        &["expense-tracker", "list", "--order-by", "bogus"],
        &["expense-tracker", "report", "range", "--from", "2024-01-01"],
        &["expense-tracker", "report", "category", "--top", "0"],
    ];
    for argv in bad {
        assert!(cli::build_cli().try_get_matches_from(argv).is_err(), "{argv:?}");
    }
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self { dir: tempdir().unwrap() }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
        cmd.env("EXPENSE_TRACKER_DB", self.dir.path().join("expenses.sqlite"))
            .env("EXPENSE_TRACKER_LOG_DIR", self.dir.path().join("logs"))
            .env_remove("EXPENSE_TRACKER_DEBUG")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn end_to_end_add_list_report_delete() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    for (date, cat, amt) in [
        ("2024-01-01", "Food", "10"),
        ("2024-01-02", "Food", "20"),
        ("2024-01-03", "Transport", "30"),
    ] {
        sb.cmd()
            .args(["add", "--date", date, "--category", cat, "--amount", amt])
            .assert()
            .success()
            .stdout(predicate::str::contains("Recorded"));
    }

    sb.cmd()
        .args(["list", "--order-by", "amount", "--desc", "--jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"id\":3,"));

    sb.cmd()
        .args(["report", "category", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pct_total\": 50.0"));

    sb.cmd()
        .args(["report", "range", "--from", "2024-01-02", "--to", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25.00"));

    sb.cmd()
        .args(["report", "range", "--from", "2030-01-01", "--to", "2030-12-31", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));

    sb.cmd().args(["delete", "1"]).assert().failure();
    sb.cmd()
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 row(s)."));
    sb.cmd()
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense with ID 1."));

    sb.cmd().args(["update", "2"]).assert().failure();
    sb.cmd()
        .args(["update", "2", "--note", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 1 row(s)."));

    sb.cmd()
        .args(["list", "--text", "grocer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groceries"));

    assert!(sb.dir.path().join("logs").join("tracker.log").exists());
}

#[test]
fn report_top_keeps_shares_of_full_total() {
    let sb = Sandbox::new();
    for (cat, amt) in [("Rent", "60"), ("Food", "30"), ("Fun", "10")] {
        sb.cmd()
            .args(["add", "--date", "2024-05-01", "--category", cat, "--amount", amt])
            .assert()
            .success();
    }

    let out = sb
        .cmd()
        .args(["report", "category", "--top", "1", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["category"], "Rent");
    let pct = rows[0]["pct_total"].as_f64().unwrap();
    assert!((pct - 60.0).abs() < 1e-9, "pct was {pct}");
}

#[test]
fn empty_database_prints_placeholders() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to display."));
    sb.cmd()
        .args(["report", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to report."));
}
