//! Disc image identification.
//!
//! Ties the playlist scanners, the signature table and the per-console
//! serial decoders together. Most callers only need [`identify_path`].

pub mod ascii;
pub mod cue;
pub mod decoder;
pub mod error;
pub mod gdi;
pub mod identify;
pub mod settings;
pub mod signature;

pub use cue::{CandidateState, CueSelector, locate_cue_track, next_cue_file};
pub use decoder::{Decoder, DecoderParseError};
pub use error::SettingsError;
pub use gdi::{GdiEntry, locate_gdi_track, next_gdi_file};
pub use identify::{
    Identification, PlaylistKind, ScanOptions, identify_path, identify_stream,
    list_playlist_files,
};
pub use settings::{ScanSettings, Settings};
pub use signature::{MAGIC_NUMBERS, MagicEntry, detect_system};

// Re-export core types so frontends need only depend on this crate.
pub use discscan_core::{
    Confidence, LocalFs, MemoryFs, ReadSeek, ScanError, Serial, System, TrackLocation, Vfs,
    util,
};
