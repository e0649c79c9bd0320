use super::state_tag::StateTag;
use serde::Serialize;

/// Seconds in one day; valid event times are in `[0, SECONDS_PER_DAY)`.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Value used for "no timestamp" when a signed, flat representation is needed.
pub const MISSING_SECONDS: i64 = -1;

/// A parsed cell: state tag plus seconds since midnight, `None` when the cell was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedEvent {
    pub tag: StateTag,
    pub seconds: Option<u32>,
}

impl ParsedEvent {
    pub fn new(tag: StateTag, seconds: u32) -> Self {
        Self {
            tag,
            seconds: Some(seconds),
        }
    }

    /// The event produced for an empty cell: tag `n`, no time.
    pub fn missing() -> Self {
        Self {
            tag: StateTag::NO_ENTRY,
            seconds: None,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.seconds.is_none()
    }

    /// Seconds of day, or `-1` for a missing event.
    pub fn seconds_or_sentinel(&self) -> i64 {
        self.seconds.map_or(MISSING_SECONDS, i64::from)
    }
}
