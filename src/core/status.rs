//! Tri-state classification of a priority item against the clock.

use crate::core::due::effective_due;
use crate::core::week::week_start;
use crate::models::PriorityItem;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Deadline not yet reached this week.
    Upcoming,
    /// Effective due instant has passed.
    Overdue,
    /// Completed this week, so next week's occurrence is shown.
    NextWeek,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Upcoming => "upcoming",
            Status::Overdue => "overdue",
            Status::NextWeek => "next_week",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an item at instant `now`.
///
/// Tie-break: `effective_due == now` counts as not-yet-due.
/// An item completed this week whose rolled-forward due has *also*
/// already passed still reports Overdue (clock anomaly / stale data);
/// the branch is kept explicit on purpose.
pub fn status_of(item: &PriorityItem, now: NaiveDateTime) -> Status {
    let ws = week_start(now);
    let eff = effective_due(item, now);
    if item.completed_week_start == Some(ws.date()) {
        if eff >= now {
            Status::NextWeek
        } else {
            Status::Overdue
        }
    } else if eff >= now {
        Status::Upcoming
    } else {
        Status::Overdue
    }
}
