//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // wait out a concurrent writer instead of failing with BUSY,
        // so racing timer starts reach the unique-index verdict
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
