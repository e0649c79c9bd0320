//! Timestamp cell parsing: `<tag><h>:<m>[m]<am|pm>` → (tag, seconds of day).

use crate::errors::{AppError, AppResult};
use crate::models::{ParsedEvent, RawCell, StateTag};
use crate::utils::time::{parse_time_12h, seconds_of_day};
use regex::Regex;
use std::sync::LazyLock;

static CELL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>\p{Alphabetic})\s*(?P<time>\d{1,2}:\d{1,2}\s*[AaPp][Mm])$")
        .expect("valid timestamp cell pattern")
});

/// Where a cell sits in the table, for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct CellPos<'a> {
    pub slot: usize,
    pub day: usize,
    pub label: &'a str,
}

/// Parse one table cell.
///
/// - `Missing` → tag `n`, no seconds
/// - `Text` → tag from the first character, seconds from the 12-hour clock
///
/// A present but malformed cell is an `InvalidTimestamp` error naming its position.
pub fn parse_cell(cell: &RawCell, pos: CellPos<'_>) -> AppResult<ParsedEvent> {
    let text = match cell {
        RawCell::Missing => return Ok(ParsedEvent::missing()),
        RawCell::Text(text) => text,
    };

    parse_timestamp(text).ok_or_else(|| AppError::InvalidTimestamp {
        slot: pos.slot,
        day: pos.day,
        label: pos.label.to_string(),
        cell: text.clone(),
    })
}

/// Parse a tagged timestamp string such as `s11:45pm`.
pub fn parse_timestamp(text: &str) -> Option<ParsedEvent> {
    let caps = CELL_RE.captures(text.trim())?;
    let tag = caps["tag"].chars().next()?;
    let time = parse_time_12h(&caps["time"])?;

    Some(ParsedEvent::new(StateTag::new(tag), seconds_of_day(time)))
}
