use predicates::str::contains;

mod common;
use common::{cd, init_db_with_members, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("admin_init");

    cd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // init is idempotent
    cd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_db_check_and_vacuum() {
    let db_path = setup_test_db("admin_check");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_db_info_counts_rows() {
    let db_path = setup_test_db("admin_info");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "mark", "aki", "--date", "2025-09-01"])
        .assert()
        .success();

    cd()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Members"))
        .stdout(contains("Attendance records"));
}

#[test]
fn test_audit_trail_records_operations() {
    let db_path = setup_test_db("admin_audit");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "start",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "10:00",
        ])
        .assert()
        .success();

    cd()
        .args(["--db", &db_path, "audit", "--print"])
        .assert()
        .success()
        .stdout(contains("duty_started"));
}

#[test]
fn test_user_list_shows_roster() {
    let db_path = setup_test_db("admin_users");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "user", "list"])
        .assert()
        .success()
        .stdout(contains("aki"))
        .stdout(contains("Core team"))
        .stdout(contains("2 member(s)"));
}

#[test]
fn test_duplicate_member_rejected() {
    let db_path = setup_test_db("admin_dup_user");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "user", "add", "aki"])
        .assert()
        .failure()
        .stderr(contains("already registered"));
}

#[test]
fn test_invalid_role_rejected() {
    let db_path = setup_test_db("admin_bad_role");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "user", "add", "new", "--role", "janitor"])
        .assert()
        .failure()
        .stderr(contains("Invalid role"));
}
