//! Annotation of stored items with derived scheduling fields.

use crate::core::due::{effective_due, minutes_until_due};
use crate::core::status::status_of;
use crate::models::{AnnotatedItem, PriorityItem};
use chrono::NaiveDateTime;

pub fn annotate(item: PriorityItem, now: NaiveDateTime) -> AnnotatedItem {
    let effective_due_at = effective_due(&item, now);
    let status = status_of(&item, now);
    let minutes_until_due = minutes_until_due(&item, now);
    AnnotatedItem {
        item,
        effective_due_at,
        status,
        minutes_until_due,
    }
}

/// Annotate and sort for display: not-yet-due first (ascending by
/// effective due), overdue afterwards (also ascending).
pub fn annotate_all(items: Vec<PriorityItem>, now: NaiveDateTime) -> Vec<AnnotatedItem> {
    let mut out: Vec<AnnotatedItem> = items.into_iter().map(|i| annotate(i, now)).collect();
    out.sort_by_key(|o| (o.effective_due_at < now, o.effective_due_at));
    out
}
