use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Civil-month window [1st 00:00, next month 1st 00:00).
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}")))?;
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{next_y:04}-{next_m:02}")))?;
    Ok((start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)))
}

/// Short label for a 0-based weekday (0 = Monday … 6 = Sunday).
pub fn weekday_label(w: u32) -> &'static str {
    match w {
        0 => "Mon",
        1 => "Tue",
        2 => "Wed",
        3 => "Thu",
        4 => "Fri",
        5 => "Sat",
        6 => "Sun",
        _ => "???",
    }
}
