use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, sl};

/// Record one closed session and pin it to a fixed interval so the
/// month-window assertions do not depend on the wall clock.
fn seed_session(db_path: &str, id: &str, start: &str, end: &str) {
    sl().args(["--db", db_path, "timer", "start"])
        .assert()
        .success();
    sl().args(["--db", db_path, "timer", "stop"])
        .assert()
        .success();
    sl().args([
        "--db", db_path, "timer", "correct", id, "--start", start, "--end", end,
    ])
    .assert()
    .success();
}

#[test]
fn test_sessions_list_filters_by_month() {
    let db_path = setup_test_db("sessions_month_filter");
    init_db(&db_path);

    seed_session(&db_path, "1", "2024-05-20 09:00", "2024-05-20 10:30");
    seed_session(&db_path, "2", "2024-06-03 14:00", "2024-06-03 15:00");

    sl().args(["--db", &db_path, "sessions", "--year", "2024", "--month", "5"])
        .assert()
        .success()
        .stdout(contains("2024-05-20 09:00:00"))
        .stdout(contains("2024-06-03").not());

    sl().args(["--db", &db_path, "sessions", "--year", "2024", "--month", "6"])
        .assert()
        .success()
        .stdout(contains("2024-06-03 14:00:00"))
        .stdout(contains("2024-05-20").not());
}

#[test]
fn test_sessions_list_newest_first() {
    let db_path = setup_test_db("sessions_order");
    init_db(&db_path);

    seed_session(&db_path, "1", "2024-06-03 09:00", "2024-06-03 10:00");
    seed_session(&db_path, "2", "2024-06-10 09:00", "2024-06-10 10:00");

    let out = sl()
        .args(["--db", &db_path, "sessions", "--year", "2024", "--month", "6"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    let later = text.find("2024-06-10").expect("later session missing");
    let earlier = text.find("2024-06-03").expect("earlier session missing");
    assert!(later < earlier, "sessions must be listed newest first");
}

#[test]
fn test_sessions_empty_month_reports_nothing() {
    let db_path = setup_test_db("sessions_empty");
    init_db(&db_path);

    sl().args(["--db", &db_path, "sessions", "--year", "2020", "--month", "1"])
        .assert()
        .success()
        .stdout(contains("No sessions in 2020-01"));
}

#[test]
fn test_sessions_json_output() {
    let db_path = setup_test_db("sessions_json");
    init_db(&db_path);

    seed_session(&db_path, "1", "2024-06-03 09:00", "2024-06-03 10:00");

    sl().args([
        "--db", &db_path, "sessions", "--year", "2024", "--month", "6", "--json",
    ])
    .assert()
    .success()
    .stdout(contains("\"started_at\""))
    .stdout(contains("\"minutes\": 60"));
}

#[test]
fn test_summary_sums_minutes_per_month() {
    let db_path = setup_test_db("summary_sum");
    init_db(&db_path);

    seed_session(&db_path, "1", "2024-06-03 09:00", "2024-06-03 10:30");
    seed_session(&db_path, "2", "2024-06-05 20:00", "2024-06-05 20:45");
    seed_session(&db_path, "3", "2024-07-01 09:00", "2024-07-01 09:30");

    sl().args(["--db", &db_path, "summary", "--year", "2024", "--month", "6"])
        .assert()
        .success()
        .stdout(contains("135 min"));
}

#[test]
fn test_summary_empty_month_is_zero() {
    let db_path = setup_test_db("summary_zero");
    init_db(&db_path);

    sl().args(["--db", &db_path, "summary", "--year", "2020", "--month", "2"])
        .assert()
        .success()
        .stdout(contains("0 min"));
}

#[test]
fn test_summary_rejects_invalid_month() {
    let db_path = setup_test_db("summary_bad_month");
    init_db(&db_path);

    sl().args(["--db", &db_path, "summary", "--year", "2024", "--month", "13"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}
