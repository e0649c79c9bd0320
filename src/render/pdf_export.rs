use crate::errors::{AppError, AppResult};
use crate::models::StackedChart;
use crate::render::colors::ColorKey;
use crate::render::pdf::ChartPdf;
use crate::ui::messages::{info, success};
use std::io;
use std::path::Path;

/// Render the stacked chart to a PDF file.
///
/// Nothing is written when a tag has no configured color.
pub fn export_chart_pdf(
    chart: &StackedChart,
    key: &ColorKey,
    title: &str,
    days_per_page: usize,
    path: &Path,
) -> AppResult<()> {
    info(format!("Rendering PDF chart: {}", path.display()));

    let mut pdf = ChartPdf::new();
    pdf.write_chart(chart, key, title, days_per_page)?;
    let pages = pdf.page_count();

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    success(format!(
        "PDF chart written: {} ({} day(s), {} page(s))",
        path.display(),
        chart.day_count(),
        pages
    ));
    Ok(())
}
