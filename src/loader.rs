//! Sleep table loader: delimited file → `SleepTable`.
//!
//! First record = day labels, every following record = one event slot.

use crate::errors::{AppError, AppResult};
use crate::models::{RawCell, SleepTable};
use std::io::Read;
use std::path::Path;

/// Load a table from disk.
pub fn load_table(path: &Path, delimiter: u8) -> AppResult<SleepTable> {
    if !path.exists() {
        return Err(AppError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("sleep table not found: {}", path.display()),
        )));
    }

    let reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    read_records(reader)
}

/// Load a table from any reader, e.g. an in-memory buffer.
pub fn read_table<R: Read>(input: R, delimiter: u8) -> AppResult<SleepTable> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    read_records(reader)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> AppResult<SleepTable> {
    let labels: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    if labels.iter().all(|l| l.is_empty()) {
        return Err(AppError::EmptyTable("missing header row".into()));
    }

    let mut rows = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;

        if record.len() > labels.len() {
            return Err(AppError::Table(format!(
                "row {} has {} fields but the header has {}",
                idx + 1,
                record.len(),
                labels.len()
            )));
        }

        let mut row: Vec<RawCell> = record.iter().map(RawCell::from_field).collect();
        row.resize(labels.len(), RawCell::Missing);
        rows.push(row);
    }

    SleepTable::new(labels, rows)
}
