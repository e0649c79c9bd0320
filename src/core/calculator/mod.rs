pub mod baseline;
pub mod durations;

pub use baseline::{stack_offsets, sum_all_rows};
pub use durations::{DurationPolicy, compute_durations};
