//! Settings file handling.
//!
//! The settings file lives at `~/.config/sauce-dump/settings.toml`:
//!
//! ```toml
//! [output]
//! format = "json"
//! strict_dates = true
//! ```
//!
//! Every key is optional. Command-line flags take priority over the file.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CliError;
use crate::cli_types::OutputFormat;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub output: OutputSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct OutputSettings {
    pub format: Option<OutputFormat>,
    pub strict_dates: bool,
}

/// Canonical path to the settings file: `~/.config/sauce-dump/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("sauce-dump").join("settings.toml")
}

/// Load settings from the canonical path. A missing file yields defaults.
pub(crate) fn load_settings() -> Result<Settings, CliError> {
    load_settings_from(&settings_path())
}

pub(crate) fn load_settings_from(path: &Path) -> Result<Settings, CliError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents).map_err(|e| CliError::config(format!("{}: {e}", path.display())))
}

impl Settings {
    /// Resolve the output format: CLI flag, then settings file, then text.
    pub(crate) fn resolve_format(&self, cli_override: Option<OutputFormat>) -> OutputFormat {
        cli_override.or(self.output.format).unwrap_or_default()
    }

    /// Strict date checking is on if either the flag or the file enables it.
    pub(crate) fn resolve_strict_dates(&self, cli_flag: bool) -> bool {
        cli_flag || self.output.strict_dates
    }
}
