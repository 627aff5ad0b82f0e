use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, sl};

#[test]
fn test_timer_start_stop_cycle() {
    let db_path = setup_test_db("timer_cycle");
    init_db(&db_path);

    sl().args(["--db", &db_path, "timer", "start", "--memo", "reading"])
        .assert()
        .success()
        .stdout(contains("Timer started"));

    sl().args(["--db", &db_path, "timer", "stop"])
        .assert()
        .success()
        .stdout(contains("Timer stopped"));
}

#[test]
fn test_timer_second_start_conflicts() {
    let db_path = setup_test_db("timer_conflict");
    init_db(&db_path);

    sl().args(["--db", &db_path, "timer", "start"])
        .assert()
        .success();

    // the single-open-session invariant: the second start must lose
    sl().args(["--db", &db_path, "timer", "start"])
        .assert()
        .failure()
        .stderr(contains("already running"));

    // after stopping, starting works again
    sl().args(["--db", &db_path, "timer", "stop"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "timer", "start"])
        .assert()
        .success();
}

#[test]
fn test_timer_simultaneous_starts_have_one_winner() {
    let db_path = setup_test_db("timer_simultaneous");
    init_db(&db_path);

    let mut handles = Vec::new();
    for _ in 0..2 {
        let db = db_path.clone();
        handles.push(std::thread::spawn(move || {
            sl().args(["--db", &db, "timer", "start"])
                .output()
                .expect("failed to run binary")
        }));
    }
    let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let winners = outputs.iter().filter(|o| o.status.success()).count();
    assert_eq!(winners, 1, "exactly one concurrent start may win");

    let loser = outputs.iter().find(|o| !o.status.success()).unwrap();
    assert!(
        String::from_utf8_lossy(&loser.stderr).contains("already running"),
        "the losing start must report the running timer"
    );
}

#[test]
fn test_timer_stop_without_running_fails() {
    let db_path = setup_test_db("timer_idle_stop");
    init_db(&db_path);

    sl().args(["--db", &db_path, "timer", "stop"])
        .assert()
        .failure()
        .stderr(contains("No timer is currently running"));

    // stop twice in a row: second one fails the same way
    sl().args(["--db", &db_path, "timer", "start"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "timer", "stop"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "timer", "stop"])
        .assert()
        .failure()
        .stderr(contains("No timer is currently running"));
}

#[test]
fn test_timer_status_reports_both_states() {
    let db_path = setup_test_db("timer_status");
    init_db(&db_path);

    sl().args(["--db", &db_path, "timer", "status"])
        .assert()
        .success()
        .stdout(contains("No timer is currently running"));

    sl().args(["--db", &db_path, "timer", "start"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "timer", "status"])
        .assert()
        .success()
        .stdout(contains("Timer running since"));
}

#[test]
fn test_timer_correct_rejects_reversed_interval() {
    let db_path = setup_test_db("timer_correct_bad");
    init_db(&db_path);

    sl().args(["--db", &db_path, "timer", "start"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "timer", "stop"])
        .assert()
        .success();

    // end before start
    sl().args([
        "--db",
        &db_path,
        "timer",
        "correct",
        "1",
        "--start",
        "2024-06-03 10:00",
        "--end",
        "2024-06-03 09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("strictly after"));

    // end equal to start is just as invalid
    sl().args([
        "--db",
        &db_path,
        "timer",
        "correct",
        "1",
        "--start",
        "2024-06-03 09:00",
        "--end",
        "2024-06-03 09:00",
    ])
    .assert()
    .failure()
    .stderr(contains("strictly after"));
}

#[test]
fn test_timer_correct_recomputes_minutes() {
    let db_path = setup_test_db("timer_correct_ok");
    init_db(&db_path);

    sl().args(["--db", &db_path, "timer", "start"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "timer", "stop"])
        .assert()
        .success();

    sl().args([
        "--db",
        &db_path,
        "timer",
        "correct",
        "1",
        "--start",
        "2024-06-03 09:00",
        "--end",
        "2024-06-03 11:00",
        "--memo",
        "forgot to stop",
    ])
    .assert()
    .success()
    .stdout(contains("120 min"));
}

#[test]
fn test_timer_correct_unknown_id_fails() {
    let db_path = setup_test_db("timer_correct_missing");
    init_db(&db_path);

    sl().args([
        "--db",
        &db_path,
        "timer",
        "correct",
        "42",
        "--start",
        "2024-06-03 09:00",
        "--end",
        "2024-06-03 10:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Work session 42 not found"));
}

#[test]
fn test_timer_correct_rejects_garbage_timestamp() {
    let db_path = setup_test_db("timer_correct_garbage");
    init_db(&db_path);

    sl().args([
        "--db",
        &db_path,
        "timer",
        "correct",
        "1",
        "--start",
        "yesterday",
        "--end",
        "2024-06-03 10:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_timer_delete_session() {
    let db_path = setup_test_db("timer_delete");
    init_db(&db_path);

    sl().args(["--db", &db_path, "timer", "start"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "timer", "stop"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "timer", "del", "1"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    sl().args(["--db", &db_path, "timer", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}
