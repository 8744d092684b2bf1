/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const CYAN: &str = "\x1b[36m";
pub const TODAY: &str = "\x1b[30;43;1m";

/// Wrap `value` in `color` when colouring is enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
