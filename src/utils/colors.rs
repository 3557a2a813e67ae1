/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Strike-count color: 0 → green, below threshold → yellow, at/above → red.
pub fn color_for_strikes(count: i64, threshold: i64) -> &'static str {
    if count == 0 {
        GREEN
    } else if count < threshold {
        YELLOW
    } else {
        RED
    }
}
