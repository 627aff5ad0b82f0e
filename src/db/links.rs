//! CRUD and row mapping for standalone resource links.

use crate::errors::{AppError, AppResult};
use crate::models::ResourceLink;
use rusqlite::{Connection, Result, Row, params};

pub fn map_link_row(row: &Row) -> Result<ResourceLink> {
    Ok(ResourceLink {
        id: row.get("id")?,
        title: row.get("title")?,
        url: row.get("url")?,
        category: row.get("category")?,
    })
}

pub fn list_links(conn: &Connection) -> AppResult<Vec<ResourceLink>> {
    let mut stmt = conn.prepare("SELECT * FROM resource_links ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_link_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_link(conn: &Connection, id: i64) -> AppResult<ResourceLink> {
    let mut stmt = conn.prepare("SELECT * FROM resource_links WHERE id = ?1")?;
    let mut rows = stmt.query_map([id], map_link_row)?;
    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::LinkNotFound(id)),
    }
}

/// Insert a new link and return its assigned id.
pub fn insert_link(conn: &Connection, link: &ResourceLink) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO resource_links (title, url, category) VALUES (?1, ?2, ?3)",
        params![link.title, link.url, link.category],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full-row update (all fields except id).
pub fn update_link(conn: &Connection, link: &ResourceLink) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE resource_links SET title = ?1, url = ?2, category = ?3 WHERE id = ?4",
        params![link.title, link.url, link.category, link.id],
    )?;
    if changed == 0 {
        return Err(AppError::LinkNotFound(link.id));
    }
    Ok(())
}

pub fn delete_link(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM resource_links WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::LinkNotFound(id));
    }
    Ok(())
}
