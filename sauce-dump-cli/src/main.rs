//! sauce-dump CLI
//!
//! Command-line viewer for SAUCE metadata records appended to ANSI art,
//! images, music and archives.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use cli_types::{Cli, Commands, OutputFormat};
pub(crate) use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = settings::load_settings();

    // JSON goes to stdout, so log lines move out of its way.
    let output_format = match (&cli.command, &settings) {
        (Commands::Show { format, .. }, Ok(s)) => s.resolve_format(*format),
        (Commands::Show { format, .. }, Err(_)) => format.unwrap_or_default(),
        _ => OutputFormat::Text,
    };
    init_logging(
        cli.quiet,
        cli.verbose,
        commands::show::log_stream(output_format),
    );

    let result = match cli.command {
        Commands::Show {
            files,
            format,
            strict_dates,
        } => settings.and_then(|settings| {
            commands::show::run_show(
                &files,
                settings.resolve_format(format),
                settings.resolve_strict_dates(strict_dates),
            )
        }),
        Commands::Types => {
            commands::types::run_types();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Settings => commands::settings::run_settings().map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Install the logger. Normal output is `info`; `--quiet` keeps only
/// warnings and errors, `--verbose` adds debug messages with their level.
/// `RUST_LOG` still overrides per-module filters.
fn init_logging(quiet: bool, verbose: bool, stream: owo_colors::Stream) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(match stream {
            owo_colors::Stream::Stderr => env_logger::Target::Stderr,
            _ => env_logger::Target::Stdout,
        })
        .format(move |buf, record| {
            if verbose {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        })
        .init();
}

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
