use chrono::NaiveDateTime;
use serde::Serialize;

/// A work session recorded by the global timer.
///
/// At most one session in the whole store may have `ended_at` unset;
/// that row is the currently running timer. The invariant is enforced
/// by a storage-level unique index, not by this struct.
#[derive(Debug, Clone, Serialize)]
pub struct WorkSession {
    pub id: i64,
    pub started_at: NaiveDateTime,        // ⇔ work_sessions.started_at (TEXT, naive local)
    pub ended_at: Option<NaiveDateTime>,  // ⇔ work_sessions.ended_at (NULL = running)
    pub minutes: Option<i64>,             // floor(elapsed seconds / 60), set on stop/correct
    pub memo: Option<String>,
}

impl WorkSession {
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}
