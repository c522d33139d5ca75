use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating and decoding a SAUCE trailer.
///
/// A file that simply has no trailer is not an error: decoding returns
/// `Ok(None)` in that case.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file is too small to hold a trailer plus at least one byte of body
    #[error("file too short: need at least {expected} bytes, got {actual}")]
    TooShort { expected: u64, actual: u64 },

    /// The reader returned fewer bytes than the trailer length
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// The file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while seeking or reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

/// Error returned by strict parsing of the `YYYYMMDD` date field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFieldError {
    /// One of the year/month/day groups contains a non-digit byte
    #[error("malformed {part} in date field {raw:?}")]
    NotDecimal { part: &'static str, raw: String },
}
