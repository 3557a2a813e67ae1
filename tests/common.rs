#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cd() -> Command {
    cargo_bin_cmd!("clubduty")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clubduty.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and register a small roster useful for many tests:
/// a student ("aki") and a core-team member ("mentor").
pub fn init_db_with_members(db_path: &str) {
    cd()
        .args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();

    cd()
        .args(["--db", db_path, "user", "add", "aki", "--role", "student"])
        .assert()
        .success();

    cd()
        .args(["--db", db_path, "user", "add", "mentor", "--role", "core-team"])
        .assert()
        .success();
}

/// Run a complete, rule-clean duty session for "aki" on the given date:
/// 10:00 → 12:30 with hourly check-ins, no break (150 net minutes).
pub fn run_clean_session(db_path: &str, date: &str) {
    cd()
        .args(["--db", db_path, "duty", "start", "aki", "--date", date, "--at", "10:00"])
        .assert()
        .success();

    for t in ["11:00", "12:00"] {
        cd()
            .args(["--db", db_path, "checkin", "aki", "--date", date, "--at", t])
            .assert()
            .success();
    }

    cd()
        .args(["--db", db_path, "duty", "end", "aki", "--date", date, "--at", "12:30"])
        .assert()
        .success();
}
