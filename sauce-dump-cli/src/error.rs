use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// Per-file decode failures are reported inline and never surface here.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
