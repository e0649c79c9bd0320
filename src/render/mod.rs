//! Chart rendering: color lookup, axis marks and the PDF writer.

pub mod axis;
pub mod colors;
pub mod pdf;
mod pdf_export;

pub use colors::{ColorKey, Rgb};
pub use pdf::ChartPdf;
pub use pdf_export::export_chart_pdf;
