use crate::core::status::Status;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// A recurring weekly study/work obligation.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityItem {
    pub id: i64,
    pub book: String,                  // ⇔ priority_items.book (TEXT NOT NULL)
    pub due_weekday: u32,              // ⇔ priority_items.due_weekday (0=Mon … 6=Sun)
    pub due_hour: u32,                 // ⇔ priority_items.due_hour (0-23)
    pub due_minute: u32,               // ⇔ priority_items.due_minute (0-59)
    pub flags: BTreeMap<String, bool>, // ⇔ priority_items.flags (TEXT, JSON object)
    pub links: Vec<String>,            // ⇔ priority_items.links (TEXT, JSON array)
    pub memo: Option<String>,
    /// Monday date of the week in which the item was marked complete.
    /// Always a Monday; written only by the complete/uncomplete path.
    pub completed_week_start: Option<NaiveDate>,
}

impl PriorityItem {
    /// Constructor for items created from the CLI; `id = 0` means
    /// "not yet inserted" (the DB assigns the real id).
    pub fn new(
        book: String,
        due_weekday: u32,
        due_hour: u32,
        due_minute: u32,
        flags: BTreeMap<String, bool>,
        links: Vec<String>,
        memo: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            book,
            due_weekday,
            due_hour,
            due_minute,
            flags,
            links,
            memo,
            completed_week_start: None,
        }
    }

    /// Wall-clock time of day the item is due.
    /// due_hour/due_minute are range-checked at write time (CLI
    /// validation + DB CHECK constraints).
    pub fn due_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.due_hour, self.due_minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// A priority item annotated with the derived scheduling fields the
/// read path returns: everything is computed from
/// (recurrence rule, completion marker, now) and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedItem {
    #[serde(flatten)]
    pub item: PriorityItem,
    pub effective_due_at: NaiveDateTime,
    pub status: Status,
    pub minutes_until_due: i64,
}
