//! Time utilities: timestamp parsing/formatting and minute rendering.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Storage format for naive civil timestamps. Lexicographic order of
/// this format equals chronological order, so TEXT comparisons in SQL
/// range queries are safe.
pub const DB_DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_db_datetime(dt: NaiveDateTime) -> String {
    dt.format(DB_DATETIME_FMT).to_string()
}

pub fn parse_db_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DB_DATETIME_FMT).ok()
}

/// Parse a timestamp typed by the user. Seconds are optional, and a
/// 'T' separator is accepted alongside a space.
pub fn parse_user_datetime(s: &str) -> AppResult<NaiveDateTime> {
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    Err(AppError::InvalidTimestamp(s.to_string()))
}

/// "HH:MM" rendering of a minute count, sign-aware.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// "20h 34m" rendering for summaries.
pub fn format_hours_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}h {:02}m", sign, m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_roundtrip() {
        let dt = parse_user_datetime("2024-06-03 09:00").unwrap();
        assert_eq!(format_db_datetime(dt), "2024-06-03 09:00:00");
        assert_eq!(parse_db_datetime("2024-06-03 09:00:00"), Some(dt));
    }

    #[test]
    fn user_input_accepts_t_separator() {
        assert!(parse_user_datetime("2024-06-03T09:00:30").is_ok());
        assert!(parse_user_datetime("yesterday").is_err());
    }

    #[test]
    fn minute_rendering() {
        assert_eq!(format_minutes(3540), "59:00");
        assert_eq!(format_minutes(-61), "-01:01");
        assert_eq!(format_hours_minutes(1234), "20h 34m");
    }
}
