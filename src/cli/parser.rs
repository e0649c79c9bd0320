use crate::core::calculator::DurationPolicy;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rsleepchart
/// CLI application to chart a daily sleep-state log
#[derive(Parser)]
#[command(
    name = "rsleepchart",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a daily sleep-state log (CSV) into a stacked time-block bar chart",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render the stacked bar chart to a PDF file
    Plot {
        /// Sleep table (CSV); defaults to `data_file` from the configuration
        input: Option<String>,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output PDF file")]
        out: String,

        #[arg(long, help = "Chart title (overrides chart_title)")]
        title: Option<String>,

        #[arg(long, value_enum, help = "Interval measurement (overrides duration_policy)")]
        policy: Option<DurationPolicy>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Export the computed time blocks
    Export {
        /// Sleep table (CSV); defaults to `data_file` from the configuration
        input: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'o', value_name = "FILE", help = "Output file")]
        out: String,

        #[arg(long, value_enum, help = "Interval measurement (overrides duration_policy)")]
        policy: Option<DurationPolicy>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Print the time blocks of each day
    List {
        /// Sleep table (CSV); defaults to `data_file` from the configuration
        input: Option<String>,

        #[arg(long, help = "Show only the day with this column label")]
        day: Option<String>,

        #[arg(long, value_enum, help = "Interval measurement (overrides duration_policy)")]
        policy: Option<DurationPolicy>,
    },
}
