//! Tests for the staffdb binary
//!
//! These tests verify:
//! - Account provisioning and the login gate
//! - Record commands load, mutate and save the data file
//! - Failures exit with status 1

use std::path::Path;
use std::process::{Command, Output};

use staffdb::{RecordManager, RecordStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn staffdb(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_staffdb"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .unwrap()
}

fn logged_in(dir: &Path, args: &[&str]) -> Output {
    let mut full = vec!["-u", "admin", "-p", "secret"];
    full.extend_from_slice(args);
    staffdb(dir, &full)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn provisioned() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let output = staffdb(temp_dir.path(), &["init", "admin", "secret"]);
    assert!(output.status.success());
    temp_dir
}

// =============================================================================
// Account Tests
// =============================================================================

#[test]
fn test_init_creates_account() {
    let temp_dir = TempDir::new().unwrap();

    let output = staffdb(temp_dir.path(), &["init", "admin", "secret"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("[INFO] Admin account saved"));
    assert!(temp_dir.path().join("admin.auth").exists());
    assert!(!temp_dir.path().join("employees.db").exists());
}

#[test]
fn test_reinit_requires_current_login() {
    let temp_dir = provisioned();

    let denied = staffdb(temp_dir.path(), &["init", "mallory", "pw"]);
    assert_eq!(denied.status.code(), Some(1));

    let allowed = logged_in(temp_dir.path(), &["init", "root", "pw2"]);
    assert!(allowed.status.success());
}

#[test]
fn test_record_command_without_account_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = staffdb(temp_dir.path(), &["list"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("[ERROR]"));
}

#[test]
fn test_wrong_password_is_rejected() {
    let temp_dir = provisioned();

    let output = staffdb(temp_dir.path(), &["-u", "admin", "-p", "nope", "list"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Authentication failed"));
}

// =============================================================================
// Record Command Tests
// =============================================================================

#[test]
fn test_add_saves_and_list_shows() {
    let temp_dir = provisioned();

    let added = logged_in(temp_dir.path(), &["add", "Ann", "Ops", "2024-01-15", "20"]);
    assert!(added.status.success());
    assert!(stdout(&added).contains("Employee 1001 added"));

    let listed = logged_in(temp_dir.path(), &["list"]);
    assert!(stdout(&listed).contains("Ann"));

    let mut manager = RecordManager::new();
    RecordStore::new(temp_dir.path().join("employees.db"))
        .load(&mut manager)
        .unwrap();
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.next_id(), 1002);
}

#[test]
fn test_ids_continue_across_runs() {
    let temp_dir = provisioned();
    logged_in(temp_dir.path(), &["add", "Ann", "Ops", "2024-01-15", "20"]);
    logged_in(temp_dir.path(), &["remove", "1001"]);

    let output = logged_in(temp_dir.path(), &["add", "Bob", "Dev", "2024-01-16", "23"]);

    assert!(stdout(&output).contains("Employee 1002 added"));
}

#[test]
fn test_negative_days_exit_with_error() {
    let temp_dir = provisioned();

    let output = logged_in(temp_dir.path(), &["add", "Ann", "Ops", "2024-01-15", "-3"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("employees.db").exists());
}

#[test]
fn test_stats_and_search() {
    let temp_dir = provisioned();
    logged_in(temp_dir.path(), &["add", "Ann Smith", "Ops", "2024-01-15", "20"]);
    logged_in(temp_dir.path(), &["add", "Bob", "Dev", "2024-01-16", "23"]);
    logged_in(temp_dir.path(), &["add", "Cy Smith", "Ops", "2024-02-17", "24"]);

    let month = logged_in(temp_dir.path(), &["stats", "--month", "2024-01"]);
    assert!(stdout(&month).contains("2024-01: 43"));

    let year = logged_in(temp_dir.path(), &["stats", "--year", "2024"]);
    assert!(stdout(&year).contains("2024: 67"));

    let found = logged_in(temp_dir.path(), &["search", "--name", "Smith"]);
    assert!(stdout(&found).contains("2 found"));
}

#[test]
fn test_export_writes_csv() {
    let temp_dir = provisioned();
    logged_in(temp_dir.path(), &["add", "Ann", "Ops", "2024-01-15", "20"]);

    let output = logged_in(temp_dir.path(), &["export"]);

    assert!(output.status.success());
    let csv = std::fs::read_to_string(temp_dir.path().join("employees.csv")).unwrap();
    assert_eq!(
        csv,
        "id,name,department,attendance_date,attendance_days\n1001,Ann,Ops,2024-01-15,20\n"
    );
}
