//! GDI playlist scanning (Dreamcast GD-ROM dumps).
//!
//! A GDI file starts with the track count, followed by one line per track:
//!
//! ```text
//! track_number  lba  mode  sector_size  filename  disc_offset
//! 1 0 4 2352 "track01.bin" 0
//! 2 756 0 2352 track02.raw 0
//! ```
//!
//! Mode 0 with 2352-byte sectors is audio; anything else is data.

use std::io::Read;
use std::path::{Path, PathBuf};

use discscan_core::{CD_FRAME_SIZE, ReadSeek, ScanError, Tokenizer, Vfs};

use crate::cue::playlist_dir;

/// One track line of a GDI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdiEntry {
    pub mode: i32,
    pub sector_size: i32,
    /// Track file, resolved against the GDI directory
    pub path: PathBuf,
}

impl GdiEntry {
    pub fn is_data(&self) -> bool {
        !(self.mode == 0 && self.sector_size as u64 == CD_FRAME_SIZE)
    }
}

fn parse_field(text: &str, what: &str) -> Result<i32, ScanError> {
    text.parse()
        .map_err(|_| ScanError::parse(format!("invalid GDI {what} '{text}'")))
}

/// Read one track line. `None` when no track number is left.
fn read_entry<R: Read>(
    tokens: &mut Tokenizer<R>,
    gdi_dir: &Path,
) -> Result<Option<GdiEntry>, ScanError> {
    if tokens.next_token()?.is_none() {
        return Ok(None);
    }
    tokens.expect_token("GDI track offset")?;
    let mode = parse_field(tokens.expect_token("GDI track mode")?.as_str(), "mode")?;
    let sector_size = parse_field(
        tokens.expect_token("GDI sector size")?.as_str(),
        "sector size",
    )?;
    let name = tokens.expect_token("GDI track filename")?;
    tokens.expect_token("GDI disc offset")?;

    Ok(Some(GdiEntry {
        mode,
        sector_size,
        path: gdi_dir.join(name.as_str()),
    }))
}

/// Find the data track file of the GDI playlist at `gdi_path`.
///
/// With `first` set the first data track wins; otherwise the largest
/// track file does.
pub fn locate_gdi_track(
    fs: &dyn Vfs,
    gdi_path: &Path,
    first: bool,
) -> Result<PathBuf, ScanError> {
    let stream = fs.open(gdi_path)?;
    log::debug!("Parsing GDI file '{}'...", gdi_path.display());

    let gdi_dir = playlist_dir(gdi_path);
    let mut tokens = Tokenizer::new(stream);
    if tokens.next_token()?.is_none() {
        return Err(ScanError::not_found(format!(
            "GDI file '{}' is empty",
            gdi_path.display()
        )));
    }

    let mut best: Option<PathBuf> = None;
    let mut largest = 0;
    while let Some(entry) = read_entry(&mut tokens, gdi_dir)? {
        if !entry.is_data() {
            continue;
        }
        let size = fs.file_size(&entry.path)?;
        if size > largest {
            log::debug!("GDI data track '{}' ({size} bytes)", entry.path.display());
            largest = size;
            best = Some(entry.path);
            if first {
                break;
            }
        }
    }

    best.ok_or_else(|| {
        ScanError::not_found(format!("no data track in '{}'", gdi_path.display()))
    })
}

/// Read the next track line from `stream` and return its file, resolved
/// against the directory of `gdi_path`.
///
/// At stream position 0 the track count is consumed first. The stream is
/// only advanced, so repeated calls walk every track in order. `None` once
/// no filename is left.
pub fn next_gdi_file(
    stream: &mut dyn ReadSeek,
    gdi_path: &Path,
) -> Result<Option<PathBuf>, ScanError> {
    let at_start = stream.stream_position()? == 0;
    let mut tokens = Tokenizer::new(stream);
    if at_start {
        tokens.next_token()?;
    }

    // track number, lba, mode, sector size
    for _ in 0..4 {
        tokens.next_token()?;
    }
    let Some(name) = tokens.next_token()? else {
        return Ok(None);
    };
    tokens.next_token()?;

    Ok(Some(playlist_dir(gdi_path).join(name.as_str())))
}

#[cfg(test)]
#[path = "tests/gdi_tests.rs"]
mod tests;
