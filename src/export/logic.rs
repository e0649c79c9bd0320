// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::output::{OutputKind, claim_output};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::chart_to_exports;
use crate::export::xlsx::export_xlsx;
use crate::models::StackedChart;
use crate::ui::messages::info;
use std::path::Path;

/// High level export of the computed segments.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every (day, slot) segment of the chart to `path` in `format`.
    pub fn export(
        chart: &StackedChart,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        claim_output(path, OutputKind::Segments(format), force)?;

        let segments = chart_to_exports(chart);

        info(format!(
            "{} segment(s) → {}",
            segments.len(),
            format.as_str()
        ));

        match format {
            ExportFormat::Csv => export_csv(&segments, path)?,
            ExportFormat::Json => export_json(&segments, path)?,
            ExportFormat::Xlsx => export_xlsx(&segments, path)?,
        }

        Ok(())
    }
}
