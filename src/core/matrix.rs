use crate::core::parser::{CellPos, parse_cell};
use crate::errors::AppResult;
use crate::models::{EventMatrix, SleepTable};

/// Parse every cell of the table into the tag and seconds grids.
///
/// Row and column order are kept exactly as in the table. The first
/// malformed cell aborts the whole build.
pub fn build_event_matrix(table: &SleepTable) -> AppResult<EventMatrix> {
    let labels = table.labels();
    let mut tags = Vec::with_capacity(table.slot_count());
    let mut seconds = Vec::with_capacity(table.slot_count());

    for (slot, row) in table.rows().iter().enumerate() {
        let mut tag_row = Vec::with_capacity(row.len());
        let mut secs_row = Vec::with_capacity(row.len());

        for (day, cell) in row.iter().enumerate() {
            let pos = CellPos {
                slot,
                day,
                label: &labels[day],
            };
            let event = parse_cell(cell, pos)?;
            tag_row.push(event.tag);
            secs_row.push(event.seconds);
        }

        tags.push(tag_row);
        seconds.push(secs_row);
    }

    Ok(EventMatrix {
        labels: labels.to_vec(),
        tags,
        seconds,
    })
}
