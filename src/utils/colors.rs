/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";
pub const YELLOW: &str = "\x1b[33m";

use crate::models::StateTag;

/// Terminal color used for a state tag in listings.
pub fn color_for_tag(tag: StateTag) -> &'static str {
    match tag.code() {
        'a' => YELLOW,
        'b' => CYAN,
        's' => BLUE,
        'e' => MAGENTA,
        'n' => GREY,
        _ => WHITE,
    }
}

/// Grey-out placeholder values (`--:--`, `00h 00m`), leave others untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_tag(tag: StateTag) -> String {
    format!("{}{}{}", color_for_tag(tag), tag, RESET)
}
