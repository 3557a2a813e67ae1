use predicates::str::contains;

mod common;
use common::{cd, init_db_with_members, setup_test_db};

#[test]
fn test_mark_attendance() {
    let db_path = setup_test_db("att_mark");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "mark",
            "aki",
            "--date",
            "2025-09-01",
            "--status",
            "present",
        ])
        .assert()
        .success()
        .stdout(contains("aki marked Present on 2025-09-01"));
}

#[test]
fn test_duplicate_day_rejected() {
    let db_path = setup_test_db("att_dup");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "mark", "aki", "--date", "2025-09-01"])
        .assert()
        .success();

    cd()
        .args([
            "--db",
            &db_path,
            "mark",
            "aki",
            "--date",
            "2025-09-01",
            "--status",
            "absent",
        ])
        .assert()
        .failure()
        .stderr(contains("already recorded for aki on 2025-09-01"));
}

#[test]
fn test_duty_start_records_attendance_for_the_day() {
    let db_path = setup_test_db("att_duty_day");
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

    // The session start already wrote the day's attendance row
    cd()
        .args(["--db", &db_path, "mark", "aki", "--date", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("already recorded"));
}

#[test]
fn test_approve_requires_moderator() {
    let db_path = setup_test_db("att_approve_role");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "mark", "aki", "--date", "2025-09-01"])
        .assert()
        .success();

    // Students cannot approve
    cd()
        .args(["--db", &db_path, "approve", "1", "--by", "aki"])
        .assert()
        .failure()
        .stderr(contains("not allowed"));

    // Core team members can
    cd()
        .args(["--db", &db_path, "approve", "1", "--by", "mentor"])
        .assert()
        .success()
        .stdout(contains("approved by mentor"));
}

#[test]
fn test_invalid_status_rejected() {
    let db_path = setup_test_db("att_bad_status");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "mark",
            "aki",
            "--date",
            "2025-09-01",
            "--status",
            "vacationing",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid attendance status"));
}

#[test]
fn test_unknown_member_rejected() {
    let db_path = setup_test_db("att_unknown");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "mark", "nobody", "--date", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("Unknown user: nobody"));
}
