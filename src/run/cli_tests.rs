#![allow(clippy::unwrap_used)]

use std::path::Path;

use super::run_command;
use crate::storage::{MemoryStore, SqliteStore};

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("piebudget")
        .chain(list.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Run one command against the database at `db`, as a fresh process would.
fn run(db: &Path, list: &[&str]) -> anyhow::Result<String> {
    let store = SqliteStore::open(db).unwrap();
    let mut out = Vec::new();
    run_command(&args(list), store, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn logged_in_db(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let db = dir.path().join("piebudget.db");
    run(&db, &["register", "alice", "secret1"]).unwrap();
    run(&db, &["login", "alice", "secret1"]).unwrap();
    db
}

#[test]
fn test_help_and_version() {
    let mut out = Vec::new();
    run_command(&args(&["--help"]), MemoryStore::new(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Usage: piebudget"));
    assert!(text.contains("PIEBUDGET_DATA_DIR"));

    let mut out = Vec::new();
    run_command(&args(&["-V"]), MemoryStore::new(), &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("piebudget "));
}

#[test]
fn test_unknown_command_fails() {
    let mut out = Vec::new();
    let err = run_command(&args(&["frobnicate"]), MemoryStore::new(), &mut out).unwrap_err();
    assert!(err.to_string().contains("Unknown command: frobnicate"));
    assert!(!out.is_empty());
}

#[test]
fn test_register_login_whoami_logout() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("piebudget.db");

    let out = run(&db, &["register", "alice", "secret1"]).unwrap();
    assert!(out.contains("Account created for alice"));
    assert_eq!(run(&db, &["whoami"]).unwrap().trim(), "Not logged in");

    let out = run(&db, &["login", "alice", "secret1"]).unwrap();
    assert_eq!(out.trim(), "Login successful!");
    assert_eq!(run(&db, &["whoami"]).unwrap().trim(), "alice");

    assert_eq!(run(&db, &["logout"]).unwrap().trim(), "Logged out alice.");
    assert_eq!(run(&db, &["whoami"]).unwrap().trim(), "Not logged in");
    assert_eq!(run(&db, &["logout"]).unwrap().trim(), "Not logged in.");
}

#[test]
fn test_login_rejects_bad_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("piebudget.db");
    run(&db, &["register", "alice", "secret1"]).unwrap();

    let err = run(&db, &["login", "alice", "wrongpass"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid username or password.");
    let err = run(&db, &["login", "alice", "abc"]).unwrap_err();
    assert_eq!(err.to_string(), "Password must be at least 6 characters.");
    let err = run(&db, &["login", "alice"]).unwrap_err();
    assert!(err.to_string().starts_with("Usage:"));
}

#[test]
fn test_add_requires_login() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("piebudget.db");
    assert!(run(&db, &["add", "5", "food"]).is_err());
    assert!(run(&db, &["list"]).is_err());
    assert!(run(&db, &["summary"]).is_err());
}

#[test]
fn test_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let db = logged_in_db(&dir);

    let out = run(&db, &["add", "12.5", "eating", "out"]).unwrap();
    assert!(out.contains("Added eating out: $12.50"));
    assert!(out.contains("Income: $12.50"));
    run(&db, &["add", "7", "rent"]).unwrap();

    let out = run(&db, &["list"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("eating out: $12.50"));
    assert!(lines[1].ends_with("rent: $7.00"));
}

#[test]
fn test_add_rejects_invalid_amount() {
    let dir = tempfile::tempdir().unwrap();
    let db = logged_in_db(&dir);

    assert!(run(&db, &["add", "-4", "food"]).is_err());
    assert!(run(&db, &["add", "abc", "food"]).is_err());
    assert!(run(&db, &["add", "4"]).is_err());
    assert!(run(&db, &["add"]).is_err());
    assert_eq!(run(&db, &["list"]).unwrap().trim(), "No transactions yet");
}

#[test]
fn test_summary_groups_by_category() {
    let dir = tempfile::tempdir().unwrap();
    let db = logged_in_db(&dir);

    let out = run(&db, &["summary"]).unwrap();
    assert!(out.contains("No transactions yet"));

    run(&db, &["add", "30", "food"]).unwrap();
    run(&db, &["add", "50", "rent"]).unwrap();
    run(&db, &["add", "20", "food"]).unwrap();

    let out = run(&db, &["summary"]).unwrap();
    assert!(out.contains("Income:     $100.00"));
    assert!(out.contains("Total Txns: 3"));
    let food = out.lines().find(|l| l.trim_start().starts_with("food")).unwrap();
    assert!(food.contains("$50.00"));
    assert!(food.contains("50.0%"));
    let food_pos = out.find("food").unwrap();
    let rent_pos = out.find("rent").unwrap();
    assert!(food_pos < rent_pos);
}

#[test]
fn test_summary_with_max_income() {
    let dir = tempfile::tempdir().unwrap();
    let db = logged_in_db(&dir);
    run(&db, &["add", "79228162514264337593543950335", "big"]).unwrap();
    assert!(run(&db, &["add", "1", "big"]).is_err());

    let out = run(&db, &["summary"]).unwrap();
    let big = out.lines().find(|l| l.trim_start().starts_with("big")).unwrap();
    assert!(big.contains("100.0%"));
}
