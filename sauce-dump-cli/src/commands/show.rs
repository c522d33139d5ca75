use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use sauce_dump_core::{Dimensions, SauceDate, SauceRecord, decode_path, render};

use crate::CliError;
use crate::cli_types::OutputFormat;

/// JSON entry for one input file.
#[derive(Serialize)]
struct FileReport {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<SauceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FileReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            record: None,
            size: None,
            error: None,
        }
    }
}

/// Run the show command.
///
/// Each file is decoded independently; a failure on one file is reported
/// and the rest are still processed. Exits non-zero if any file failed.
pub(crate) fn run_show(
    files: &[PathBuf],
    format: OutputFormat,
    strict_dates: bool,
) -> Result<ExitCode, CliError> {
    let mut failures = 0usize;
    let mut reports = Vec::new();
    let stream = log_stream(format);

    for path in files {
        let mut report = FileReport::new(path);
        match decode_path(path) {
            Ok(Some(record)) => {
                check_record(path, &record, strict_dates);
                if format == OutputFormat::Text {
                    print_record(path, &record, stream);
                }
                report.size = record.dimensions();
                report.record = Some(record);
            }
            Ok(None) => {
                if format == OutputFormat::Text {
                    log::info!(
                        "{}: {}",
                        path.display(),
                        "no SAUCE record".if_supports_color(stream, |t| t.dimmed()),
                    );
                }
            }
            Err(e) => {
                failures += 1;
                log::warn!(
                    "{}: {} {}",
                    path.display(),
                    "\u{26A0} error".if_supports_color(stream, |t| t.yellow()),
                    e,
                );
                report.error = Some(e.to_string());
            }
        }
        reports.push(report);
    }

    if format == OutputFormat::Json {
        let mut out = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut out, &reports)?;
        writeln!(out)?;
    }

    log::debug!(
        "processed {} file(s), {} failed",
        files.len(),
        failures
    );

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// The stream log lines end up on. JSON mode keeps stdout for the document.
pub(crate) fn log_stream(format: OutputFormat) -> Stream {
    match format {
        OutputFormat::Text => Stream::Stdout,
        OutputFormat::Json => Stream::Stderr,
    }
}

/// Warn about fields that decoded but look off.
fn check_record(path: &Path, record: &SauceRecord, strict_dates: bool) {
    if !record.is_supported_version() {
        log::warn!(
            "{}: unsupported SAUCE version {:?}, fields may be misread",
            path.display(),
            String::from_utf8_lossy(&record.version()),
        );
    }
    if strict_dates {
        if let Err(e) = SauceDate::parse_strict(record.raw_date()) {
            log::warn!("{}: {} (shown as {})", path.display(), e, record.date());
        }
    }
}

fn print_record(path: &Path, record: &SauceRecord, stream: Stream) {
    log::info!(
        "{}",
        path.display().if_supports_color(stream, |t| t.bold())
    );
    for line in &render(record) {
        log::info!("{}", line);
    }
    crate::log_blank();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_logs_colour_for_stderr() {
        assert!(matches!(log_stream(OutputFormat::Json), Stream::Stderr));
        assert!(matches!(log_stream(OutputFormat::Text), Stream::Stdout));
    }
}
