use thiserror::Error;

use discscan_lib::{ScanError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Scanning or decoding failed
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// Settings could not be loaded or rendered
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Some of several inputs failed; each was already reported
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
