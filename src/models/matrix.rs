use super::event::ParsedEvent;
use super::state_tag::StateTag;

/// Two parallel `[slot][day]` grids produced from a sleep table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventMatrix {
    pub labels: Vec<String>,
    pub tags: Vec<Vec<StateTag>>,
    pub seconds: Vec<Vec<Option<u32>>>,
}

impl EventMatrix {
    pub fn slot_count(&self) -> usize {
        self.tags.len()
    }

    pub fn day_count(&self) -> usize {
        self.labels.len()
    }

    pub fn event(&self, slot: usize, day: usize) -> Option<ParsedEvent> {
        let tag = *self.tags.get(slot)?.get(day)?;
        let seconds = *self.seconds.get(slot)?.get(day)?;
        Some(ParsedEvent { tag, seconds })
    }

    /// The seconds grid in the flat signed form (`-1` for missing).
    pub fn seconds_with_sentinel(&self) -> Vec<Vec<i64>> {
        self.seconds
            .iter()
            .map(|row| {
                row.iter()
                    .map(|s| s.map_or(super::event::MISSING_SECONDS, i64::from))
                    .collect()
            })
            .collect()
    }
}
