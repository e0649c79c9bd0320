use crate::models::SECONDS_PER_DAY;
use crate::utils::time::clock_label;

/// Spacing of the y axis marks.
pub const TICK_STEP: u32 = 3600;

/// Hourly y axis marks with their 12-hour labels: `(0, "12:00AM")` … `(82800, "11:00PM")`.
pub fn y_ticks() -> Vec<(u32, String)> {
    (0..SECONDS_PER_DAY)
        .step_by(TICK_STEP as usize)
        .map(|s| (s, clock_label(s)))
        .collect()
}

/// Top of the y axis: a full day, or the tallest bar if it overflows.
pub fn y_max(day_totals: &[u32]) -> u32 {
    day_totals
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(SECONDS_PER_DAY)
}
