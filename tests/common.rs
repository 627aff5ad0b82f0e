#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sl() -> Command {
    cargo_bin_cmd!("studylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh schema at the given path (uses --test so the
/// user's real config file is never touched)
pub fn init_db(db_path: &str) {
    sl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize and seed a couple of priority items
pub fn init_db_with_items(db_path: &str) {
    init_db(db_path);

    sl().args([
        "--db",
        db_path,
        "item",
        "add",
        "grammar workbook",
        "--weekday",
        "2",
        "--hour",
        "18",
    ])
    .assert()
    .success();

    sl().args([
        "--db",
        db_path,
        "item",
        "add",
        "listening drills",
        "--weekday",
        "5",
        "--hour",
        "9",
        "--minute",
        "30",
    ])
    .assert()
    .success();
}
