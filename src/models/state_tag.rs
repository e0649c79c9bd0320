use serde::{Serialize, Serializer};
use std::fmt;

/// Single-character sleep-state code taken from the first character of a cell.
///
/// The set is open: any alphabetic character is accepted by the parser, and
/// whether it can be drawn is decided later by the color key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateTag(char);

impl StateTag {
    pub const AWAKE: StateTag = StateTag('a');
    pub const IN_BED: StateTag = StateTag('b');
    pub const DAY_EDGE: StateTag = StateTag('e');
    pub const SLEEPING: StateTag = StateTag('s');
    /// Emitted for cells with no timestamp at all.
    pub const NO_ENTRY: StateTag = StateTag('n');

    pub fn new(code: char) -> Self {
        Self(code)
    }

    pub fn code(&self) -> char {
        self.0
    }

    /// Parse a config key ("b", "s", ...) into a tag.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self(c)),
            _ => None,
        }
    }

    pub fn is_no_entry(&self) -> bool {
        *self == Self::NO_ENTRY
    }

    /// Human readable state name, used in legends and listings.
    pub fn describe(&self) -> &'static str {
        match self.0 {
            'a' => "Awake",
            'b' => "In bed",
            'e' => "Day boundary",
            's' => "Sleeping",
            'n' => "No entry",
            _ => "Other",
        }
    }
}

impl fmt::Display for StateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StateTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.0)
    }
}
