use predicates::str::contains;

mod common;
use common::{cd, init_db_with_members, setup_test_db};

fn issue_manual_strikes(db_path: &str, n: usize) {
    for i in 0..n {
        cd()
            .args([
                "--db",
                db_path,
                "strike",
                "issue",
                "aki",
                "--detail",
                &format!("test strike {}", i + 1),
            ])
            .assert()
            .success();
    }
}

#[test]
fn test_fifth_strike_triggers_suspension() {
    let db_path = setup_test_db("strike_threshold");
    init_db_with_members(&db_path);

    issue_manual_strikes(&db_path, 4);

    // The fifth strike crosses the threshold
    cd()
        .args(["--db", &db_path, "strike", "issue", "aki"])
        .assert()
        .success()
        .stdout(contains("reached 5 active strikes"))
        .stdout(contains("suspended until"));

    // Suspension gates attendance marking…
    cd()
        .args(["--db", &db_path, "mark", "aki", "--date", "2025-09-01"])
        .assert()
        .failure()
        .stderr(contains("suspended until"));

    // …and duty starts
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
        .failure()
        .stderr(contains("suspended until"));
}

#[test]
fn test_resolving_a_strike_lifts_suspension() {
    let db_path = setup_test_db("strike_lift");
    init_db_with_members(&db_path);

    issue_manual_strikes(&db_path, 5);

    cd()
        .args(["--db", &db_path, "strike", "resolve", "1", "--by", "mentor"])
        .assert()
        .success()
        .stdout(contains("Strike 1 resolved by mentor"));

    // Back below the threshold: the member may act again
    cd()
        .args(["--db", &db_path, "mark", "aki", "--date", "2025-09-01"])
        .assert()
        .success();
}

#[test]
fn test_resolve_requires_moderator() {
    let db_path = setup_test_db("strike_role");
    init_db_with_members(&db_path);

    issue_manual_strikes(&db_path, 1);

    cd()
        .args(["--db", &db_path, "strike", "resolve", "1", "--by", "aki"])
        .assert()
        .failure()
        .stderr(contains("not allowed"));
}

#[test]
fn test_resolve_twice_fails() {
    let db_path = setup_test_db("strike_twice");
    init_db_with_members(&db_path);

    issue_manual_strikes(&db_path, 1);

    cd()
        .args(["--db", &db_path, "strike", "resolve", "1", "--by", "mentor"])
        .assert()
        .success();

    cd()
        .args(["--db", &db_path, "strike", "resolve", "1", "--by", "mentor"])
        .assert()
        .failure()
        .stderr(contains("already resolved"));
}

#[test]
fn test_missed_hourly_logs_strike_at_session_end() {
    let db_path = setup_test_db("strike_missed_log");
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

    // 150 minutes, no check-ins at all → one strike per missed hour
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
        .stdout(contains("Strike issued: Missed hourly log"));

    cd()
        .args(["--db", &db_path, "strike", "list", "aki"])
        .assert()
        .success()
        .stdout(contains("Missed hourly log"))
        .stdout(contains("2 strike(s)"));
}

#[test]
fn test_excessive_break_strike_at_session_end() {
    let db_path = setup_test_db("strike_break");
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

    for t in ["11:00", "12:00", "13:00"] {
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

    // 180 elapsed − 50 break = 130 net: eligible, but the break itself
    // is over the 45-minute limit
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
            "13:00",
            "--break",
            "50",
        ])
        .assert()
        .success()
        .stdout(contains("counts toward club duty"))
        .stdout(contains("Strike issued: Excessive break"));
}

#[test]
fn test_invalid_reason_rejected() {
    let db_path = setup_test_db("strike_bad_reason");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "strike",
            "issue",
            "aki",
            "--reason",
            "tardiness",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid strike reason"));
}
