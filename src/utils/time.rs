//! Time utilities: 12-hour clock parsing, seconds-of-day conversion, labels.

use crate::models::SECONDS_PER_DAY;
use chrono::{NaiveTime, Timelike};

/// Parse a 12-hour clock such as `3:30pm`, `03:30 PM`, `1:5am` or `12:00am`.
pub fn parse_time_12h(t: &str) -> Option<NaiveTime> {
    let compact: String = t.split_whitespace().collect();
    NaiveTime::parse_from_str(&compact, "%I:%M%p").ok()
}

/// Seconds elapsed since midnight, minute precision.
pub fn seconds_of_day(t: NaiveTime) -> u32 {
    t.hour() * 3600 + t.minute() * 60
}

/// Inverse of [`seconds_of_day`]; values past midnight wrap around.
pub fn time_from_seconds(secs: u32) -> NaiveTime {
    let secs = secs % SECONDS_PER_DAY;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
}

/// 12-hour label (`03:30PM`) for a seconds-of-day value.
pub fn clock_label(secs: u32) -> String {
    time_from_seconds(secs).format("%I:%M%p").to_string()
}

/// Same as [`clock_label`], with `--:--` for a missing value.
pub fn optional_clock_label(secs: Option<u32>) -> String {
    secs.map(clock_label).unwrap_or_else(|| "--:--".to_string())
}
