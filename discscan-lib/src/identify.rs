//! End-to-end identification of a disc image.
//!
//! Picks the data track of a playlist (or takes a raw image as is), detects
//! the console family, and runs the matching serial decoder.

use std::path::{Path, PathBuf};

use serde::Serialize;

use discscan_core::{ReadSeek, ScanError, Serial, System, TrackLocation, TrackWindow, Vfs};

use crate::cue::{locate_cue_track, next_cue_file};
use crate::decoder::{Decoder, extract_serial};
use crate::gdi::{locate_gdi_track, next_gdi_file};
use crate::settings::ScanSettings;
use crate::signature::detect_system;

/// Per-scan switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// In playlists, use the first data track instead of the largest.
    pub first_track: bool,
    /// Run the generic ASCII decoder when no signature matches.
    pub ascii_fallback: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            first_track: true,
            ascii_fallback: true,
        }
    }
}

impl From<&ScanSettings> for ScanOptions {
    fn from(settings: &ScanSettings) -> Self {
        Self {
            first_track: settings.first_track,
            ascii_fallback: settings.ascii_fallback,
        }
    }
}

/// Playlist formats that reference separate track files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKind {
    Cue,
    Gdi,
}

impl PlaylistKind {
    /// Classify a path by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("cue") {
            Some(Self::Cue)
        } else if ext.eq_ignore_ascii_case("gdi") {
            Some(Self::Gdi)
        } else {
            None
        }
    }
}

/// Everything learned about one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identification {
    /// The path that was identified (playlist or image)
    pub path: PathBuf,
    /// The data track used, for playlists
    pub track: Option<TrackLocation>,
    pub system: Option<System>,
    pub decoder: Option<Decoder>,
    pub serial: Option<Serial>,
}

/// Open the stream the decoders should see: the data track of a playlist,
/// or the file itself.
fn open_data_track(
    fs: &dyn Vfs,
    path: &Path,
    options: &ScanOptions,
) -> Result<(Box<dyn ReadSeek>, Option<TrackLocation>), ScanError> {
    match PlaylistKind::from_path(path) {
        Some(PlaylistKind::Cue) => {
            let track = locate_cue_track(fs, path, options.first_track)?;
            let file = fs.open(&track.path)?;
            let window = TrackWindow::new(file, track.offset, track.size)?;
            Ok((Box::new(window), Some(track)))
        }
        Some(PlaylistKind::Gdi) => {
            let track_path = locate_gdi_track(fs, path, options.first_track)?;
            let size = fs.file_size(&track_path)?;
            let file = fs.open(&track_path)?;
            let track = TrackLocation {
                offset: 0,
                size,
                path: track_path,
            };
            Ok((file, Some(track)))
        }
        None => Ok((fs.open(path)?, None)),
    }
}

/// Detect the console family of `stream` and extract its serial.
///
/// A decoder that finds nothing (or hits an unsupported layout) leaves the
/// serial empty; only I/O and parse errors are returned.
pub fn identify_stream(
    stream: &mut dyn ReadSeek,
    options: &ScanOptions,
) -> Result<(Option<System>, Option<Decoder>, Option<Serial>), ScanError> {
    let system = detect_system(stream)?;
    let decoder = match system {
        Some(system) => Some(Decoder::for_system(system)),
        None if options.ascii_fallback => Some(Decoder::Ascii),
        None => None,
    };

    let serial = match decoder {
        Some(decoder) => match extract_serial(stream, decoder) {
            Ok(serial) => Some(serial),
            Err(err) if err.is_not_found() => {
                log::debug!("No serial from {decoder} decoder: {err}");
                None
            }
            Err(err) => return Err(err),
        },
        None => None,
    };

    Ok((system, decoder, serial))
}

/// Identify the image or playlist at `path`.
pub fn identify_path(
    fs: &dyn Vfs,
    path: &Path,
    options: &ScanOptions,
) -> Result<Identification, ScanError> {
    let (mut stream, track) = open_data_track(fs, path, options)?;
    let (system, decoder, serial) = identify_stream(stream.as_mut(), options)?;
    Ok(Identification {
        path: path.to_path_buf(),
        track,
        system,
        decoder,
        serial,
    })
}

/// List every track file referenced by a CUE or GDI playlist, in order.
pub fn list_playlist_files(fs: &dyn Vfs, path: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let kind = PlaylistKind::from_path(path).ok_or_else(|| {
        ScanError::unsupported(format!("'{}' is not a CUE or GDI playlist", path.display()))
    })?;
    let mut stream = fs.open(path)?;

    let next: fn(&mut dyn ReadSeek, &Path) -> Result<Option<PathBuf>, ScanError> = match kind {
        PlaylistKind::Cue => next_cue_file,
        PlaylistKind::Gdi => next_gdi_file,
    };

    let mut files = Vec::new();
    while let Some(file) = next(stream.as_mut(), path)? {
        files.push(file);
    }
    Ok(files)
}

#[cfg(test)]
#[path = "tests/identify_tests.rs"]
mod tests;
