//! Work-session storage: the timer's single-open-session invariant
//! lives here, at the storage boundary.

use crate::core::timer::elapsed_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::WorkSession;
use crate::utils::time::{format_db_datetime, parse_db_datetime};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Result, Row, params};

pub fn map_session_row(row: &Row) -> Result<WorkSession> {
    let started_str: String = row.get("started_at")?;
    let started_at = parse_db_datetime(&started_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(started_str.clone())),
        )
    })?;

    let ended_str: Option<String> = row.get("ended_at")?;
    let ended_at = match ended_str {
        Some(s) => Some(parse_db_datetime(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(WorkSession {
        id: row.get("id")?,
        started_at,
        ended_at,
        minutes: row.get("minutes")?,
        memo: row.get("memo")?,
    })
}

pub fn get_session(conn: &Connection, id: i64) -> AppResult<WorkSession> {
    let mut stmt = conn.prepare("SELECT * FROM work_sessions WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_session_row)?;
    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::SessionNotFound(id)),
    }
}

/// The currently running session, if any.
pub fn open_session(conn: &Connection) -> AppResult<Option<WorkSession>> {
    let mut stmt = conn.prepare("SELECT * FROM work_sessions WHERE ended_at IS NULL LIMIT 1")?;
    let mut rows = stmt.query_map([], map_session_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Atomic "start the timer unless one is running".
///
/// A plain INSERT: the partial unique index over open rows makes
/// SQLite itself reject a second open session, so concurrent starts
/// from any number of processes resolve to exactly one winner. No
/// check-then-insert window exists.
pub fn start_if_none_open(
    conn: &Connection,
    started_at: NaiveDateTime,
    memo: Option<&str>,
) -> AppResult<WorkSession> {
    let res = conn.execute(
        "INSERT INTO work_sessions (started_at, memo) VALUES (?1, ?2)",
        params![format_db_datetime(started_at), memo],
    );

    match res {
        Ok(_) => get_session(conn, conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::TimerAlreadyRunning)
        }
        Err(e) => Err(e.into()),
    }
}

/// Close the running session at `now`, computing its floored minutes.
pub fn stop_open(conn: &Connection, now: NaiveDateTime) -> AppResult<WorkSession> {
    let open = open_session(conn)?.ok_or(AppError::TimerNotRunning)?;

    let minutes = elapsed_minutes(open.started_at, now);
    conn.execute(
        "UPDATE work_sessions SET ended_at = ?1, minutes = ?2 WHERE id = ?3",
        params![format_db_datetime(now), minutes, open.id],
    )?;

    get_session(conn, open.id)
}

/// Administrative correction: rewrite start/end/memo and recompute
/// minutes. The open/closed state of other sessions is untouched.
/// Interval validity is checked by the caller before this runs.
pub fn update_session(
    conn: &Connection,
    id: i64,
    started_at: NaiveDateTime,
    ended_at: NaiveDateTime,
    memo: Option<&str>,
) -> AppResult<WorkSession> {
    let minutes = elapsed_minutes(started_at, ended_at);
    let changed = conn.execute(
        "UPDATE work_sessions
         SET started_at = ?1, ended_at = ?2, minutes = ?3, memo = ?4
         WHERE id = ?5",
        params![
            format_db_datetime(started_at),
            format_db_datetime(ended_at),
            minutes,
            memo,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    get_session(conn, id)
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM work_sessions WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::SessionNotFound(id));
    }
    Ok(())
}

/// Sessions started inside [start, end), newest first.
pub fn list_window(
    conn: &Connection,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<Vec<WorkSession>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM work_sessions
         WHERE started_at >= ?1 AND started_at < ?2
         ORDER BY started_at DESC",
    )?;
    let rows = stmt.query_map(
        params![format_db_datetime(start), format_db_datetime(end)],
        map_session_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sum of recorded minutes over a window, 0 when empty.
pub fn total_minutes(conn: &Connection, start: NaiveDateTime, end: NaiveDateTime) -> AppResult<i64> {
    let total: i64 = conn.query_row(
        "SELECT COALESCE(SUM(minutes), 0) FROM work_sessions
         WHERE started_at >= ?1 AND started_at < ?2",
        params![format_db_datetime(start), format_db_datetime(end)],
        |row| row.get(0),
    )?;
    Ok(total)
}
