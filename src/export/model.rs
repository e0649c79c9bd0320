// src/export/model.rs

use crate::models::{Segment, StackedChart};
use crate::utils::secs2readable;
use crate::utils::time::clock_label;
use serde::Serialize;

/// Flat record for segment export; missing event times are empty strings.
///
/// `stack_start` / `stack_end` are offsets in the day's bar, in seconds, not times of day.
#[derive(Serialize, Clone, Debug)]
pub struct SegmentExport {
    pub day: String,
    pub slot: usize,
    pub tag: String,
    pub state: String,
    pub event_time: String,
    pub stack_start: u32,
    pub stack_end: u32,
    pub duration_seconds: u32,
    pub duration: String,
}

impl From<&Segment> for SegmentExport {
    fn from(s: &Segment) -> Self {
        Self {
            day: s.day.clone(),
            slot: s.slot,
            tag: s.tag.to_string(),
            state: s.tag.describe().to_string(),
            event_time: s.event_seconds.map(clock_label).unwrap_or_default(),
            stack_start: s.start,
            stack_end: s.end,
            duration_seconds: s.duration,
            duration: secs2readable(s.duration, true),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "day",
        "slot",
        "tag",
        "state",
        "event_time",
        "stack_start",
        "stack_end",
        "duration_seconds",
        "duration",
    ]
}

pub(crate) fn segment_to_row(e: &SegmentExport) -> Vec<String> {
    vec![
        e.day.clone(),
        e.slot.to_string(),
        e.tag.clone(),
        e.state.clone(),
        e.event_time.clone(),
        e.stack_start.to_string(),
        e.stack_end.to_string(),
        e.duration_seconds.to_string(),
        e.duration.clone(),
    ]
}

pub fn chart_to_exports(chart: &StackedChart) -> Vec<SegmentExport> {
    chart.segments().iter().map(SegmentExport::from).collect()
}
