//! Versioned schema migrations, tracked via PRAGMA user_version.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const V1_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS priority_items (
    id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    book                 TEXT NOT NULL,
    due_weekday          INTEGER NOT NULL CHECK(due_weekday BETWEEN 0 AND 6),
    due_hour             INTEGER NOT NULL DEFAULT 0 CHECK(due_hour BETWEEN 0 AND 23),
    due_minute           INTEGER NOT NULL DEFAULT 0 CHECK(due_minute BETWEEN 0 AND 59),
    flags                TEXT NOT NULL DEFAULT '{}',
    links                TEXT NOT NULL DEFAULT '[]',
    memo                 TEXT,
    completed_week_start TEXT
);

CREATE TABLE IF NOT EXISTS work_sessions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    started_at TEXT NOT NULL,
    ended_at   TEXT,
    minutes    INTEGER,
    memo       TEXT
);

CREATE INDEX IF NOT EXISTS idx_work_sessions_started
    ON work_sessions(started_at);

CREATE UNIQUE INDEX IF NOT EXISTS idx_work_sessions_open
    ON work_sessions (ifnull(ended_at, 0)) WHERE ended_at IS NULL;
"#;

const V2_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS resource_links (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    title    TEXT NOT NULL,
    url      TEXT NOT NULL,
    category TEXT
);
"#;

fn user_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

fn set_user_version(conn: &Connection, v: i64) -> AppResult<()> {
    // PRAGMA does not accept bound parameters
    conn.execute_batch(&format!("PRAGMA user_version = {v}"))?;
    Ok(())
}

/// Bring the schema up to the current version. Idempotent.
///
/// The partial unique index `idx_work_sessions_open` is the
/// single-open-timer guarantee: every open row coalesces to the same
/// indexed value, so a second open INSERT fails inside SQLite no
/// matter how many processes race. NULLs compare distinct in SQLite
/// unique indexes, hence the ifnull() expression instead of indexing
/// ended_at directly.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let v = user_version(conn)?;

    if v < 1 {
        conn.execute_batch(V1_SCHEMA)
            .map_err(|e| AppError::Migration(format!("v1 schema: {e}")))?;
        set_user_version(conn, 1)?;
    }

    if v < 2 {
        conn.execute_batch(V2_SCHEMA)
            .map_err(|e| AppError::Migration(format!("v2 schema: {e}")))?;
        set_user_version(conn, 2)?;
    }

    Ok(())
}

/// Run PRAGMA integrity_check and report whether the database is sound.
pub fn integrity_check(conn: &Connection) -> AppResult<bool> {
    let verdict: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(verdict == "ok")
}
