use crate::core::calculator::{DurationPolicy, compute_durations, stack_offsets};
use crate::core::matrix::build_event_matrix;
use crate::errors::AppResult;
use crate::models::{EventMatrix, SegmentRow, SleepTable, StackedChart};

pub struct Core;

impl Core {
    /// Full pipeline: parse cells, compute durations, compute stacking offsets.
    pub fn build_chart(table: &SleepTable, policy: DurationPolicy) -> AppResult<StackedChart> {
        let matrix = build_event_matrix(table)?;
        Ok(Self::stack_matrix(matrix, policy))
    }

    /// Durations and baselines for an already parsed matrix, zipped per slot.
    pub fn stack_matrix(matrix: EventMatrix, policy: DurationPolicy) -> StackedChart {
        let durations = compute_durations(&matrix.seconds, policy);
        let baselines = stack_offsets(&durations);

        let rows = matrix
            .tags
            .into_iter()
            .zip(matrix.seconds)
            .zip(durations.into_iter().zip(baselines))
            .enumerate()
            .map(|(slot, ((tags, seconds), (durations, baselines)))| SegmentRow {
                slot,
                durations,
                tags,
                baselines,
                seconds,
            })
            .collect();

        StackedChart {
            labels: matrix.labels,
            rows,
        }
    }
}
