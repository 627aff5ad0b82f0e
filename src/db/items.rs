//! CRUD and row mapping for priority items.
//!
//! flags/links are stored as JSON text columns; the completion marker
//! is a bare "YYYY-MM-DD" (always a Monday, written only by the
//! complete path in the item command handler).

use crate::errors::{AppError, AppResult};
use crate::models::PriorityItem;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};
use std::collections::BTreeMap;

pub fn map_item_row(row: &Row) -> Result<PriorityItem> {
    let flags_str: String = row.get("flags")?;
    let flags: BTreeMap<String, bool> = serde_json::from_str(&flags_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let links_str: String = row.get("links")?;
    let links: Vec<String> = serde_json::from_str(&links_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let cws_str: Option<String> = row.get("completed_week_start")?;
    let completed_week_start = match cws_str {
        Some(s) => Some(NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(PriorityItem {
        id: row.get("id")?,
        book: row.get("book")?,
        due_weekday: row.get("due_weekday")?,
        due_hour: row.get("due_hour")?,
        due_minute: row.get("due_minute")?,
        flags,
        links,
        memo: row.get("memo")?,
        completed_week_start,
    })
}

/// All items, optionally filtered by a book-name substring.
pub fn list_items(conn: &Connection, query: Option<&str>) -> AppResult<Vec<PriorityItem>> {
    let mut out = Vec::new();

    if let Some(q) = query {
        let mut stmt = conn.prepare(
            "SELECT * FROM priority_items
             WHERE book LIKE '%' || ?1 || '%'
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([q], map_item_row)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let mut stmt = conn.prepare("SELECT * FROM priority_items ORDER BY id ASC")?;
        let rows = stmt.query_map([], map_item_row)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok(out)
}

pub fn get_item(conn: &Connection, id: i64) -> AppResult<PriorityItem> {
    let mut stmt = conn.prepare("SELECT * FROM priority_items WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_item_row)?;
    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::ItemNotFound(id)),
    }
}

/// Insert a new item and return its assigned id.
pub fn insert_item(conn: &Connection, item: &PriorityItem) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO priority_items
            (book, due_weekday, due_hour, due_minute, flags, links, memo, completed_week_start)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            item.book,
            item.due_weekday,
            item.due_hour,
            item.due_minute,
            serde_json::to_string(&item.flags)?,
            serde_json::to_string(&item.links)?,
            item.memo,
            item.completed_week_start.map(|d| d.to_string()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full-row update (all fields except id).
pub fn update_item(conn: &Connection, item: &PriorityItem) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE priority_items
         SET book = ?1, due_weekday = ?2, due_hour = ?3, due_minute = ?4,
             flags = ?5, links = ?6, memo = ?7, completed_week_start = ?8
         WHERE id = ?9",
        params![
            item.book,
            item.due_weekday,
            item.due_hour,
            item.due_minute,
            serde_json::to_string(&item.flags)?,
            serde_json::to_string(&item.links)?,
            item.memo,
            item.completed_week_start.map(|d| d.to_string()),
            item.id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::ItemNotFound(item.id));
    }
    Ok(())
}

/// Hard delete. No soft-delete or undo.
pub fn delete_item(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM priority_items WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::ItemNotFound(id));
    }
    Ok(())
}

/// Write or clear the week-scoped completion marker.
pub fn set_completed_week(conn: &Connection, id: i64, week: Option<NaiveDate>) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE priority_items SET completed_week_start = ?1 WHERE id = ?2",
        params![week.map(|d| d.to_string()), id],
    )?;
    if changed == 0 {
        return Err(AppError::ItemNotFound(id));
    }
    Ok(())
}
