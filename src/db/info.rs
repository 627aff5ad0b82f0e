use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print a short report about the database file and its contents.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let items: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM priority_items", [], |row| row.get(0))?;
    let sessions: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM work_sessions", [], |row| row.get(0))?;
    let links: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM resource_links", [], |row| row.get(0))?;
    println!(
        "{}• Priority items:{} {}{}{}",
        CYAN, RESET, GREEN, items, RESET
    );
    println!(
        "{}• Work sessions:{} {}{}{}",
        CYAN, RESET, GREEN, sessions, RESET
    );
    println!(
        "{}• Resource links:{} {}{}{}",
        CYAN, RESET, GREEN, links, RESET
    );

    //
    // 3) TIMER STATE
    //
    let open_start: Option<String> = pool
        .conn
        .query_row(
            "SELECT started_at FROM work_sessions WHERE ended_at IS NULL",
            [],
            |row| row.get(0),
        )
        .optional()?;
    match open_start {
        Some(s) => println!("{}• Timer:{} running since {}", CYAN, RESET, s),
        None => println!("{}• Timer:{} {}idle{}", CYAN, RESET, GREY, RESET),
    }

    //
    // 4) SESSION DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT started_at FROM work_sessions ORDER BY started_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT started_at FROM work_sessions ORDER BY started_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Session range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
