pub mod chart;
pub mod event;
pub mod matrix;
pub mod state_tag;
pub mod table;

pub use chart::{Segment, SegmentRow, StackedChart};
pub use event::{MISSING_SECONDS, ParsedEvent, SECONDS_PER_DAY};
pub use matrix::EventMatrix;
pub use state_tag::StateTag;
pub use table::{RawCell, SleepTable};
