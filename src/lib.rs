//! rsleepchart library root.
//!
//! The pipeline turns a table of tagged 12-hour timestamps (rows = n-th event
//! of the day, columns = days) into stacked time blocks:
//!
//! 1. [`core::parser`] parses each cell into a state tag and seconds of day
//! 2. [`core::matrix`] applies it to the whole table
//! 3. [`core::calculator::durations`] turns consecutive events into durations
//! 4. [`core::calculator::baseline`] stacks them with running offsets
//!
//! Loading ([`loader`]), drawing ([`render`]) and exporting ([`export`]) sit
//! around it. Every step is a pure function of its input.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod loader;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::Core;
pub use crate::core::calculator::DurationPolicy;
pub use errors::AppError;
pub use models::{SleepTable, StackedChart};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Plot { .. } => cli::commands::plot::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&config_path)?;

    dispatch(&cli, &cfg, &config_path)
}
