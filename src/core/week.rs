//! Week anchor arithmetic and the process-wide clock.
//!
//! Every due-date computation is anchored to the Monday 00:00 of the
//! week containing "now", in a single fixed civil timezone. The clock
//! converts the current UTC instant into that zone once and hands the
//! rest of the core a plain `NaiveDateTime`, so no zone-aware value
//! ever reaches a comparison.

use crate::config::Config;
use crate::errors::AppResult;
use chrono::{Datelike, Duration, FixedOffset, NaiveDateTime, NaiveTime, Utc};

/// Monday 00:00:00 of the week containing `now`.
///
/// Contract: `week_start(now) <= now` and `week_start(now) > now - 7d`;
/// the result's weekday is always Monday.
pub fn week_start(now: NaiveDateTime) -> NaiveDateTime {
    let days_from_monday = now.weekday().num_days_from_monday() as i64;
    let monday = now.date() - Duration::days(days_from_monday);
    monday.and_time(NaiveTime::MIN)
}

/// Wall clock pinned to the deployment's fixed civil timezone.
/// Built once at startup from the config and immutable afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: FixedOffset,
}

impl Clock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self::new(cfg.offset()?))
    }

    /// Current civil time in the fixed zone, zone-naive.
    pub fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}
