/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Duration color on the "currently here" cards:
/// under 30 minutes → green, under an hour → yellow, longer → red.
pub fn color_for_elapsed(minutes: i64) -> &'static str {
    if minutes < 30 {
        GREEN
    } else if minutes < 60 {
        YELLOW
    } else {
        RED
    }
}
