//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "sauce-dump")]
#[command(about = "Show SAUCE metadata records appended to files", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Decode and print the SAUCE record of each file
    Show {
        /// Files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format (default: settings file, then text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Warn when a date field is not plain YYYYMMDD digits
        #[arg(long)]
        strict_dates: bool,
    },

    /// List known data types and file types
    Types,

    /// Print the settings file path and contents
    Settings,
}

/// How `show` prints records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Labeled text report
    #[default]
    Text,
    /// One JSON array covering all files
    Json,
}
