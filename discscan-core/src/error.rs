use thiserror::Error;

/// Errors that can occur while scanning a disc image or playlist.
#[derive(Debug, Error)]
pub enum ScanError {
    /// I/O error from the underlying stream (open, seek, read)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed directive, bad timestamp, truncated entry or unterminated quote
    #[error("Parse error: {0}")]
    Parse(String),

    /// The input is well-formed but holds no matching track, signature or serial
    #[error("Not found: {0}")]
    NotFound(String),

    /// The input falls into a case the normalization rules do not cover
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl ScanError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// True for outcomes that mean "nothing recognizable here" rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Unsupported(_))
    }
}
