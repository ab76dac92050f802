/// Error types surfaced by the core crate.
///
/// Only caller mistakes cross the scan boundary. Inaccessible paths, failed
/// stats and unreadable directories degrade to smaller results instead.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The caller supplied a missing, non-string or empty root path.
    #[error("Invalid path provided: {0}")]
    InvalidInput(String),

    /// The browse listing for a directory could not be read.
    #[error("Cannot browse {}: {source}", path.display())]
    Browse {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScanError {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ScanError::InvalidInput(msg.into())
    }

    /// Stable machine-readable code used in error documents.
    pub fn code(&self) -> &'static str {
        match self {
            ScanError::InvalidInput(_) => "INVALID_PATH",
            ScanError::Browse { .. } => "BROWSE_FAILED",
            ScanError::ConfigRead { .. } | ScanError::ConfigParse { .. } => "INVALID_CONFIG",
        }
    }
}
