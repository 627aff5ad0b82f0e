//! Recurring-deadline resolution.
//!
//! Due instants are always derived from the stored recurrence rule and
//! the completion marker at read time; nothing materialized here is
//! ever written back, so the rule can never drift from what is shown.

use crate::core::week::week_start;
use crate::models::PriorityItem;
use chrono::{Duration, NaiveDateTime};

/// This week's nominal due instant: week start + due_weekday days, at
/// due_hour:due_minute:00. Always lies in [week_start, week_start + 7d).
pub fn due_this_week(item: &PriorityItem, now: NaiveDateTime) -> NaiveDateTime {
    let ws = week_start(now);
    let due_date = ws.date() + Duration::days(item.due_weekday as i64);
    due_date.and_time(item.due_time())
}

/// The due instant the item should display.
///
/// An obligation satisfied this week rolls forward to next week's
/// occurrence; the stored rule is left untouched.
pub fn effective_due(item: &PriorityItem, now: NaiveDateTime) -> NaiveDateTime {
    let ws = week_start(now);
    let this_due = due_this_week(item, now);
    if item.completed_week_start == Some(ws.date()) {
        this_due + Duration::days(7)
    } else {
        this_due
    }
}

/// Floored whole minutes between now and the effective due instant.
/// Negative once the deadline has passed (floor division, so -30s is
/// already -1, matching the aggregation used for session minutes).
pub fn minutes_until_due(item: &PriorityItem, now: NaiveDateTime) -> i64 {
    (effective_due(item, now) - now).num_seconds().div_euclid(60)
}
