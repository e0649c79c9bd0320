use crate::errors::{AppError, AppResult};

/// Field values the loader treats as "no data", besides empty fields.
const MISSING_MARKERS: &[&str] = &[
    "nan", "NaN", "-nan", "-NaN", "NA", "N/A", "n/a", "NULL", "null", "#N/A", "#NA", "<NA>",
    "None",
];

/// One table cell, before any timestamp parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCell {
    Missing,
    Text(String),
}

impl RawCell {
    /// Classify a raw field: blank or NA-like → `Missing`, anything else is kept trimmed.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
            RawCell::Missing
        } else {
            RawCell::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, RawCell::Missing)
    }
}

impl From<Option<&str>> for RawCell {
    fn from(value: Option<&str>) -> Self {
        value.map_or(RawCell::Missing, RawCell::from_field)
    }
}

/// Grid of raw cells: rows are event slots, columns are days.
///
/// Column order is taken as calendar order and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepTable {
    labels: Vec<String>,
    rows: Vec<Vec<RawCell>>,
}

impl SleepTable {
    /// Build a table, checking that it has at least one day and one event
    /// slot and that every row has exactly one cell per day.
    pub fn new(labels: Vec<String>, rows: Vec<Vec<RawCell>>) -> AppResult<Self> {
        if labels.is_empty() {
            return Err(AppError::EmptyTable("no day columns".into()));
        }
        if rows.is_empty() {
            return Err(AppError::EmptyTable("no event rows".into()));
        }

        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != labels.len())
        {
            return Err(AppError::Table(format!(
                "row {} has {} cells, expected {}",
                idx + 1,
                row.len(),
                labels.len()
            )));
        }

        Ok(Self { labels, rows })
    }

    /// Convenience constructor from plain string options (`None` = missing).
    pub fn from_grid(labels: &[&str], grid: &[Vec<Option<&str>>]) -> AppResult<Self> {
        let labels = labels.iter().map(|l| l.to_string()).collect();
        let rows = grid
            .iter()
            .map(|row| row.iter().map(|c| RawCell::from(*c)).collect())
            .collect();
        Self::new(labels, rows)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<RawCell>] {
        &self.rows
    }

    pub fn slot_count(&self) -> usize {
        self.rows.len()
    }

    pub fn day_count(&self) -> usize {
        self.labels.len()
    }
}
