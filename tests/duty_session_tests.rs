use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cd, init_db_with_members, setup_test_db};

#[test]
fn test_clean_session_is_duty_eligible() {
    let db_path = setup_test_db("duty_clean");
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
        .success()
        .stdout(contains("Duty session 1 started for aki"));

    for t in ["11:00", "12:00"] {
        cd()
            .args([
                "--db",
                &db_path,
                "checkin",
                "aki",
                "--date",
                "2025-09-01",
                "--at",
                t,
            ])
            .assert()
            .success();
    }

    // 150 elapsed minutes, no break → eligible, no violations
    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "end",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "12:30",
        ])
        .assert()
        .success()
        .stdout(contains("2h 30m net"))
        .stdout(contains("counts toward club duty"));
}

#[test]
fn test_second_start_conflicts() {
    let db_path = setup_test_db("duty_conflict");
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
        .args([
            "--db",
            &db_path,
            "duty",
            "start",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "10:05",
        ])
        .assert()
        .failure()
        .stderr(contains("already has an active duty session"));
}

#[test]
fn test_break_is_subtracted_from_total() {
    let db_path = setup_test_db("duty_break");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "start",
            "aki",
            "--date",
            "2025-09-02",
            "--at",
            "10:00",
        ])
        .assert()
        .success();

    for t in ["11:00", "12:00"] {
        cd()
            .args([
                "--db",
                &db_path,
                "checkin",
                "aki",
                "--date",
                "2025-09-02",
                "--at",
                t,
            ])
            .assert()
            .success();
    }

    // 165 elapsed − 45 break = 120 net: exactly at the threshold
    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "end",
            "aki",
            "--date",
            "2025-09-02",
            "--at",
            "12:45",
            "--break",
            "45",
        ])
        .assert()
        .success()
        .stdout(contains("2h 00m net"))
        .stdout(contains("counts toward club duty"));
}

#[test]
fn test_short_session_gets_no_credit() {
    let db_path = setup_test_db("duty_short");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "start",
            "aki",
            "--date",
            "2025-09-03",
            "--at",
            "10:00",
        ])
        .assert()
        .success();

    cd()
        .args([
            "--db",
            &db_path,
            "checkin",
            "aki",
            "--date",
            "2025-09-03",
            "--at",
            "11:00",
        ])
        .assert()
        .success();

    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "end",
            "aki",
            "--date",
            "2025-09-03",
            "--at",
            "11:00",
        ])
        .assert()
        .success()
        .stdout(contains("no duty credit"))
        .stdout(contains("Strike issued: Insufficient duty hours"));
}

#[test]
fn test_negative_break_rejected() {
    let db_path = setup_test_db("duty_neg_break");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "start",
            "aki",
            "--date",
            "2025-09-04",
            "--at",
            "10:00",
        ])
        .assert()
        .success();

    // A negative break would fabricate duty credit (60 − (−120) = 180)
    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "end",
            "aki",
            "--date",
            "2025-09-04",
            "--at",
            "11:00",
            "--break=-120",
        ])
        .assert()
        .failure()
        .stderr(contains("break minutes cannot be negative"));

    // The session is still open and can be closed normally
    cd()
        .args(["--db", &db_path, "duty", "status", "aki"])
        .assert()
        .success()
        .stdout(contains("Active session 1 for aki"));
}

#[test]
fn test_break_marker_does_not_block_hour_log() {
    let db_path = setup_test_db("duty_break_slot");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "start",
            "aki",
            "--date",
            "2025-09-05",
            "--at",
            "10:00",
        ])
        .assert()
        .success();

    cd()
        .args([
            "--db",
            &db_path,
            "checkin",
            "aki",
            "--date",
            "2025-09-05",
            "--at",
            "10:30",
        ])
        .assert()
        .success();

    // Break marker in hour 2…
    cd()
        .args([
            "--db",
            &db_path,
            "checkin",
            "aki",
            "--date",
            "2025-09-05",
            "--at",
            "11:05",
            "--break",
        ])
        .assert()
        .success();

    // …must not occupy the hour's slot: the real check-in still lands
    cd()
        .args([
            "--db",
            &db_path,
            "checkin",
            "aki",
            "--date",
            "2025-09-05",
            "--at",
            "11:20",
        ])
        .assert()
        .success();

    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "end",
            "aki",
            "--date",
            "2025-09-05",
            "--at",
            "12:00",
        ])
        .assert()
        .success()
        .stdout(contains("counts toward club duty"))
        .stdout(contains("Missed hourly log").not());
}

#[test]
fn test_racing_starts_only_one_succeeds() {
    let db_path = setup_test_db("duty_race");
    init_db_with_members(&db_path);

    let mut handles = Vec::new();
    for _ in 0..2 {
        let db = db_path.clone();
        handles.push(std::thread::spawn(move || {
            cd()
                .args([
                    "--db",
                    &db,
                    "duty",
                    "start",
                    "aki",
                    "--date",
                    "2025-09-01",
                    "--at",
                    "10:00",
                ])
                .output()
                .expect("run duty start")
        }));
    }

    let outputs: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("join start thread"))
        .collect();

    let successes = outputs.iter().filter(|o| o.status.success()).count();
    assert_eq!(successes, 1, "exactly one racing start may commit");
}

#[test]
fn test_end_without_active_session_fails() {
    let db_path = setup_test_db("duty_no_active");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "duty",
            "end",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "12:00",
        ])
        .assert()
        .failure()
        .stderr(contains("No active duty session for aki"));
}

#[test]
fn test_end_before_start_rejected() {
    let db_path = setup_test_db("duty_backwards");
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
        .args([
            "--db",
            &db_path,
            "duty",
            "end",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "09:30",
        ])
        .assert()
        .failure()
        .stderr(contains("end must be later than session start"));
}

#[test]
fn test_status_reports_active_session() {
    let db_path = setup_test_db("duty_status");
    init_db_with_members(&db_path);

    cd()
        .args(["--db", &db_path, "duty", "status", "aki"])
        .assert()
        .success()
        .stdout(contains("No active duty session for aki"));

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
        .args([
            "--db",
            &db_path,
            "checkin",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "10:30",
            "--prev",
            "member desk",
        ])
        .assert()
        .success();

    cd()
        .args(["--db", &db_path, "duty", "status", "aki"])
        .assert()
        .success()
        .stdout(contains("Active session 1 for aki"))
        .stdout(contains("hour 1  member desk"));
}

#[test]
fn test_duplicate_checkin_for_same_hour_fails() {
    let db_path = setup_test_db("duty_dup_checkin");
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
        .args([
            "--db",
            &db_path,
            "checkin",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "10:30",
        ])
        .assert()
        .success();

    cd()
        .args([
            "--db",
            &db_path,
            "checkin",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "10:45",
        ])
        .assert()
        .failure()
        .stderr(contains("already recorded"));
}

#[test]
fn test_checkin_without_session_fails() {
    let db_path = setup_test_db("checkin_no_session");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "checkin",
            "aki",
            "--date",
            "2025-09-01",
            "--at",
            "10:30",
        ])
        .assert()
        .failure()
        .stderr(contains("No active duty session"));
}

#[test]
fn test_duty_list_filters_by_period() {
    let db_path = setup_test_db("duty_list_period");
    init_db_with_members(&db_path);

    common::run_clean_session(&db_path, "2025-08-20");
    common::run_clean_session(&db_path, "2025-09-01");

    cd()
        .args(["--db", &db_path, "duty", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("1 session(s)"));

    cd()
        .args(["--db", &db_path, "duty", "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2 session(s)"));
}
