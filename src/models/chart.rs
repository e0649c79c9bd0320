use super::state_tag::StateTag;
use crate::core::calculator::baseline::sum_all_rows;
use serde::Serialize;
use std::collections::BTreeSet;

/// Everything the renderer needs for one event slot across all days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentRow {
    pub slot: usize,
    pub durations: Vec<u32>,
    pub tags: Vec<StateTag>,
    pub baselines: Vec<u32>,
    /// Raw event time of this slot per day, kept for listings.
    pub seconds: Vec<Option<u32>>,
}

/// Output of the pipeline: one `SegmentRow` per event slot, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackedChart {
    pub labels: Vec<String>,
    pub rows: Vec<SegmentRow>,
}

/// One drawn block: a single slot of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub day: String,
    pub slot: usize,
    pub tag: StateTag,
    pub event_seconds: Option<u32>,
    pub start: u32,
    pub end: u32,
    pub duration: u32,
}

impl StackedChart {
    pub fn slot_count(&self) -> usize {
        self.rows.len()
    }

    pub fn day_count(&self) -> usize {
        self.labels.len()
    }

    /// Total stacked height of each day's bar.
    pub fn day_totals(&self) -> Vec<u32> {
        let durations: Vec<Vec<u32>> = self.rows.iter().map(|r| r.durations.clone()).collect();
        let totals = sum_all_rows(&durations);
        if totals.is_empty() {
            vec![0; self.day_count()]
        } else {
            totals
        }
    }

    /// Distinct tags appearing anywhere in the chart, sorted.
    pub fn tags_in_use(&self) -> Vec<StateTag> {
        self.rows
            .iter()
            .flat_map(|r| r.tags.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Flatten into day-major segments (day 0 slot 0, day 0 slot 1, ...).
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.day_count() * self.slot_count());

        for (day_idx, label) in self.labels.iter().enumerate() {
            for row in &self.rows {
                let start = row.baselines[day_idx];
                let duration = row.durations[day_idx];
                out.push(Segment {
                    day: label.clone(),
                    slot: row.slot,
                    tag: row.tags[day_idx],
                    event_seconds: row.seconds[day_idx],
                    start,
                    end: start + duration,
                    duration,
                });
            }
        }

        out
    }
}
