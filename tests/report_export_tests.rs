use predicates::str::contains;
use std::fs;

mod common;
use common::{cd, init_db_with_members, run_clean_session, setup_test_db, temp_out};

#[test]
fn test_member_report_counts() {
    let db_path = setup_test_db("report_member");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "mark", "aki", "--date", "2025-09-01"])
        .assert()
        .success();
    run_clean_session(&db_path, "2025-09-02");

    cd()
        .args(["--db", &db_path, "report", "--user", "aki"])
        .assert()
        .success()
        .stdout(contains("Report for aki"))
        .stdout(contains("Days present:      1"))
        .stdout(contains("Days on duty:      1"))
        .stdout(contains("Eligible sessions: 1"))
        .stdout(contains("Duty credit:       2h 30m"));
}

#[test]
fn test_club_report_lists_all_members() {
    let db_path = setup_test_db("report_club");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("aki"))
        .stdout(contains("mentor"))
        .stdout(contains("2 member(s)"));
}

#[test]
fn test_report_period_filter() {
    let db_path = setup_test_db("report_period");
    init_db_with_members(&db_path);

    run_clean_session(&db_path, "2025-08-20");
    run_clean_session(&db_path, "2025-09-02");

    cd()
        .args(["--db", &db_path, "report", "--user", "aki", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Days on duty:      1"))
        .stdout(contains("Duty sessions:     1"));
}

#[test]
fn test_export_summary_csv() {
    let db_path = setup_test_db("export_summary_csv");
    let out = temp_out("export_summary_csv", "csv");
    init_db_with_members(&db_path);
    run_clean_session(&db_path, "2025-09-02");

    cd()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Summary export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("name,role,"));
    assert!(content.contains("aki"));
}

#[test]
fn test_export_attendance_json() {
    let db_path = setup_test_db("export_att_json");
    let out = temp_out("export_att_json", "json");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "mark", "aki", "--date", "2025-09-01"])
        .assert()
        .success();

    cd()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--attendance",
        ])
        .assert()
        .success()
        .stdout(contains("Attendance export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("\"date\": \"2025-09-01\""));
    assert!(content.contains("\"status\": \"Present\""));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    cd()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    cd()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();
}
