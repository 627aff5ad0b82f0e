/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::core::status::Status;

/// Status color: upcoming → green, overdue → red, next_week → cyan.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Upcoming => GREEN,
        Status::Overdue => RED,
        Status::NextWeek => CYAN,
    }
}
