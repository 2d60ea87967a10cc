use serde::{Deserialize, Serialize};
use std::io::{Read, Seek};
use std::path::PathBuf;

pub mod error;
pub mod platform;
pub mod stream;
pub mod token;
pub mod util;

pub use error::ScanError;
pub use platform::{System, SystemParseError};
pub use stream::{LocalFs, MemoryFs, TrackWindow, Vfs};
pub use token::{MAX_TOKEN_LEN, Token, Tokenizer};

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Bytes per raw CD frame (one sector, 1/75 s of audio).
pub const CD_FRAME_SIZE: u64 = 2352;

/// CD frames per second of playback time.
pub const CD_FRAMES_PER_SECOND: u64 = 75;

/// How closely an extracted serial matches the redump convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// The serial is in canonical form.
    Exact,
    /// The decoder collapsed several possible canonical forms into one
    /// (e.g. European GameCube sub-regions all reported as `-EUR`).
    Approximate,
}

/// A serial/game-id extracted from a disc header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Serial {
    /// Serial string, e.g. "SLUS-01234" or "DL-DOL-GALE-USA"
    pub value: String,
    pub confidence: Confidence,
}

impl Serial {
    pub fn exact(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            confidence: Confidence::Exact,
        }
    }

    pub fn approximate(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            confidence: Confidence::Approximate,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.confidence == Confidence::Exact
    }
}

impl std::fmt::Display for Serial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// The byte range of a data track inside a referenced file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackLocation {
    /// Byte offset of the track within `path`
    pub offset: u64,
    /// Track length in bytes
    pub size: u64,
    /// File holding the track
    pub path: PathBuf,
}
