use crate::models::SECONDS_PER_DAY;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the interval between two consecutive events of a day is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DurationPolicy {
    /// `|cur - prev|`, no midnight handling.
    #[default]
    Absolute,
    /// A later slot with an earlier clock time is taken to be past midnight.
    Wraparound,
}

impl DurationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationPolicy::Absolute => "absolute",
            DurationPolicy::Wraparound => "wraparound",
        }
    }

    /// Elapsed seconds between two events; 0 when either side has no data.
    pub fn interval(&self, prev: Option<u32>, cur: Option<u32>) -> u32 {
        let (Some(prev), Some(cur)) = (prev, cur) else {
            return 0;
        };

        match self {
            DurationPolicy::Absolute => cur.abs_diff(prev),
            DurationPolicy::Wraparound if cur >= prev => cur - prev,
            DurationPolicy::Wraparound => cur + SECONDS_PER_DAY - prev,
        }
    }
}

/// Per-slot durations from the seconds grid.
///
/// Slot 0 is the time from midnight to the first event (0 if missing);
/// every later slot is the interval from the previous slot of the same day.
pub fn compute_durations(seconds: &[Vec<Option<u32>>], policy: DurationPolicy) -> Vec<Vec<u32>> {
    let mut out: Vec<Vec<u32>> = Vec::with_capacity(seconds.len());

    for (slot, row) in seconds.iter().enumerate() {
        if slot == 0 {
            out.push(row.iter().map(|s| s.unwrap_or(0)).collect());
            continue;
        }

        let prev_row = &seconds[slot - 1];
        out.push(
            row.iter()
                .zip(prev_row)
                .map(|(cur, prev)| policy.interval(*prev, *cur))
                .collect(),
        );
    }

    out
}
