//! Unified application error type.
//! All modules (loader, core, render, export, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input table
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Empty sleep table: {0}")]
    EmptyTable(String),

    #[error("Malformed sleep table: {0}")]
    Table(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error(
        "Invalid timestamp '{cell}' at row {}, column {} ({label})",
        .slot + 1,
        .day + 1
    )]
    InvalidTimestamp {
        slot: usize,
        day: usize,
        label: String,
        cell: String,
    },

    // ---------------------------
    // Rendering errors
    // ---------------------------
    #[error("No color configured for state tag '{0}'")]
    UnknownTag(char),

    #[error("Unknown color name: {0}")]
    UnknownColor(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
