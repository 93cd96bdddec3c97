#![allow(clippy::unwrap_used)]

use std::io::Write;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use super::*;
use crate::summary::{summarize, MonthKey};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

// ── JSON ─────────────────────────────────────────────────────

#[test]
fn test_load_json() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "transactions.json",
        r#"[
            {"date": "2024-01-05", "amount": 50, "category": "Food", "note": "lunch"},
            {"date": "2024-01-12", "amount": 19.99, "category": "Transport", "note": ""}
        ]"#,
    );

    let txns = load_file(&path).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].category, "Food");
    assert_eq!(txns[0].amount, dec!(50));
    assert_eq!(txns[1].amount, dec!(19.99));
}

#[test]
fn test_load_json_empty_array() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.json", "[]");
    assert!(load_file(&path).unwrap().is_empty());
}

#[test]
fn test_load_json_malformed_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.json", "{not json");
    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn test_load_json_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to open"));
}

// ── CSV ──────────────────────────────────────────────────────

#[test]
fn test_load_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "transactions.csv",
        "date,amount,category,note\n\
         2024-01-05,50.00,Food,lunch\n\
         2024-01-12,19.99,Transport,\n",
    );

    let txns = load_file(&path).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].date, "2024-01-05");
    assert_eq!(txns[0].amount, dec!(50.00));
    assert_eq!(txns[1].category, "Transport");
    assert!(txns[1].note.is_empty());
}

#[test]
fn test_load_csv_cleans_currency_formatting() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "formatted.csv",
        "Date,Amount,Category,Note\n\
         2024-01-05,\"$1,250.00\",Rent,january\n",
    );

    let txns = load_file(&path).unwrap();
    assert_eq!(txns[0].amount, dec!(1250.00));
}

#[test]
fn test_load_csv_note_column_optional() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "no_note.csv", "date,amount,category\n2024-01-05,5,Food\n");

    let txns = load_file(&path).unwrap();
    assert_eq!(txns.len(), 1);
    assert!(txns[0].note.is_empty());
}

#[test]
fn test_load_csv_missing_required_column_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.csv", "date,value,category\n2024-01-05,5,Food\n");

    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().contains("'amount'"));
}

#[test]
fn test_load_csv_bad_amount_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad_amount.csv",
        "date,amount,category\n2024-01-05,lots,Food\n",
    );

    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

// ── dispatch ─────────────────────────────────────────────────

#[test]
fn test_load_file_unknown_extension_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "transactions.xml", "<txns/>");
    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().contains("Unsupported"));
}

#[test]
fn test_load_with_override_labels_by_file_name() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "mine.json", "[]");
    let (txns, label) = load(Some(path.to_str().unwrap())).unwrap();
    assert!(txns.is_empty());
    assert_eq!(label, "mine.json");
}

// ── shellexpand ──────────────────────────────────────────────

#[test]
fn test_shellexpand_home_prefix() {
    std::env::set_var("HOME", "/home/tester");
    assert_eq!(shellexpand("~/data.json"), "/home/tester/data.json");
    assert_eq!(shellexpand("/abs/data.json"), "/abs/data.json");
    assert_eq!(shellexpand("relative.json"), "relative.json");
}

// ── sample data ──────────────────────────────────────────────

#[test]
fn test_sample_dates_all_parse() {
    for txn in sample::transactions() {
        assert!(txn.year_month().is_some(), "bad sample date: {}", txn.date);
    }
}

#[test]
fn test_sample_current_month_is_populated() {
    let txns = sample::transactions();
    let key = MonthKey::current();
    let result = summarize(&txns, key.year, key.month);
    assert!(!result.is_empty());
    assert!(result.total > rust_decimal::Decimal::ZERO);

    let last = key.prev();
    let result = summarize(&txns, last.year, last.month);
    assert!(!result.is_empty());
}
