use predicates::str::contains;

mod common;
use common::{cd, init_db_with_members, setup_test_db};

fn file_request(db_path: &str) {
    cd()
        .args([
            "--db",
            db_path,
            "leave",
            "request",
            "aki",
            "--type",
            "sick",
            "--from",
            "2025-09-10",
            "--to",
            "2025-09-12",
            "--reason",
            "flu",
        ])
        .assert()
        .success()
        .stdout(contains("Leave request 1 filed for aki"));
}

#[test]
fn test_request_and_approve() {
    let db_path = setup_test_db("leave_approve");
    init_db_with_members(&db_path);

    file_request(&db_path);

    cd()
        .args(["--db", &db_path, "leave", "approve", "1", "--by", "mentor"])
        .assert()
        .success()
        .stdout(contains("Leave request 1 approved by mentor"));

    cd()
        .args(["--db", &db_path, "leave", "list", "--user", "aki"])
        .assert()
        .success()
        .stdout(contains("approved"));
}

#[test]
fn test_reject_with_reason() {
    let db_path = setup_test_db("leave_reject");
    init_db_with_members(&db_path);

    file_request(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "leave",
            "reject",
            "1",
            "--by",
            "mentor",
            "--reason",
            "event week",
        ])
        .assert()
        .success()
        .stdout(contains("Leave request 1 rejected by mentor"));
}

#[test]
fn test_request_is_decided_once() {
    let db_path = setup_test_db("leave_once");
    init_db_with_members(&db_path);

    file_request(&db_path);

    cd()
        .args(["--db", &db_path, "leave", "approve", "1", "--by", "mentor"])
        .assert()
        .success();

    cd()
        .args(["--db", &db_path, "leave", "reject", "1", "--by", "mentor"])
        .assert()
        .failure()
        .stderr(contains("already been decided"));
}

#[test]
fn test_decision_requires_moderator() {
    let db_path = setup_test_db("leave_role");
    init_db_with_members(&db_path);

    file_request(&db_path);

    cd()
        .args(["--db", &db_path, "leave", "approve", "1", "--by", "aki"])
        .assert()
        .failure()
        .stderr(contains("not allowed"));
}

#[test]
fn test_backwards_range_rejected() {
    let db_path = setup_test_db("leave_backwards");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "leave",
            "request",
            "aki",
            "--from",
            "2025-09-12",
            "--to",
            "2025-09-10",
        ])
        .assert()
        .failure()
        .stderr(contains("end date before start date"));
}

#[test]
fn test_invalid_type_rejected() {
    let db_path = setup_test_db("leave_bad_type");
    init_db_with_members(&db_path);

    cd()
        .args([
            "--db",
            &db_path,
            "leave",
            "request",
            "aki",
            "--type",
            "sabbatical",
            "--from",
            "2025-09-10",
            "--to",
            "2025-09-12",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid leave type"));
}
