//! Pure timer arithmetic shared by stop and correction paths.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Floored whole minutes between start and end.
pub fn elapsed_minutes(started_at: NaiveDateTime, ended_at: NaiveDateTime) -> i64 {
    (ended_at - started_at).num_seconds().div_euclid(60)
}

/// A corrected interval must end strictly after it starts.
pub fn check_interval(started_at: NaiveDateTime, ended_at: NaiveDateTime) -> AppResult<()> {
    if ended_at <= started_at {
        return Err(AppError::InvalidInterval);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn dt(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn fifty_nine_seconds_is_zero_minutes() {
        assert_eq!(elapsed_minutes(dt(9, 0, 0), dt(9, 0, 59)), 0);
    }

    #[test]
    fn sixty_one_seconds_is_one_minute() {
        assert_eq!(elapsed_minutes(dt(9, 0, 0), dt(9, 1, 1)), 1);
    }

    #[test]
    fn full_hours_count_exactly() {
        assert_eq!(elapsed_minutes(dt(9, 0, 0), dt(17, 30, 0)), 510);
    }

    #[test]
    fn reversed_interval_is_rejected() {
        assert!(matches!(
            check_interval(dt(10, 0, 0), dt(9, 0, 0)),
            Err(AppError::InvalidInterval)
        ));
    }

    #[test]
    fn zero_length_interval_is_rejected() {
        let t = dt(10, 0, 0);
        assert!(matches!(check_interval(t, t), Err(AppError::InvalidInterval)));
    }

    #[test]
    fn one_second_interval_is_accepted() {
        let t = dt(10, 0, 0);
        assert!(check_interval(t, t + Duration::seconds(1)).is_ok());
    }
}
