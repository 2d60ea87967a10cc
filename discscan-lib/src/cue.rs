//! CUE sheet scanning.
//!
//! A CUE sheet lists one or more binary files and the tracks inside them.
//! Track lengths are never stated: a data track runs until the next track
//! starts, the next `FILE` begins, or the referenced file ends. The
//! [`CueSelector`] state machine tracks the open data-track candidate and
//! keeps the best confirmed one.

use std::path::{Path, PathBuf};

use discscan_core::{
    CD_FRAME_SIZE, CD_FRAMES_PER_SECOND, ReadSeek, ScanError, Tokenizer, TrackLocation, Vfs,
};

/// Convert an `mm:ss:ff` INDEX timestamp to a byte offset.
///
/// Each field must be exactly two ASCII digits.
pub fn parse_timestamp(text: &str) -> Result<u64, ScanError> {
    let invalid = || ScanError::parse(format!("invalid INDEX timestamp '{text}'"));

    let mut fields = [0u64; 3];
    let mut parts = text.split(':');
    for field in &mut fields {
        let part = parts.next().ok_or_else(invalid)?;
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *field = part.parse().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    let [minutes, seconds, frames] = fields;
    Ok(((minutes * 60 + seconds) * CD_FRAMES_PER_SECOND + frames) * CD_FRAME_SIZE)
}

/// The data-track region currently being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateState {
    NoCandidate,
    /// A data track started at `start` and its end is not known yet.
    CandidateOpen { start: u64, track: i32 },
}

/// Picks the data track of a CUE sheet from the directives fed to it.
///
/// With `first` set the first confirmed candidate wins; otherwise the
/// largest one does, ties going to the earliest.
#[derive(Debug)]
pub struct CueSelector {
    first: bool,
    state: CandidateState,
    best: Option<TrackLocation>,
}

impl CueSelector {
    pub fn new(first: bool) -> Self {
        Self {
            first,
            state: CandidateState::NoCandidate,
            best: None,
        }
    }

    pub fn state(&self) -> CandidateState {
        self.state
    }

    pub fn best(&self) -> Option<&TrackLocation> {
        self.best.as_ref()
    }

    pub fn into_best(self) -> Option<TrackLocation> {
        self.best
    }

    /// Whether scanning can stop: a track was confirmed in `first` mode.
    pub fn is_done(&self) -> bool {
        self.first && self.best.is_some()
    }

    /// The current file ended (a new `FILE` or end of sheet).
    ///
    /// `end` is the size of that file, `None` when it could not be
    /// determined, in which case the open candidate is dropped.
    pub fn end_of_file(
        &mut self,
        end: Option<u64>,
        path: Option<&Path>,
    ) -> Result<bool, ScanError> {
        match end {
            Some(end) => self.resolve(end, path),
            None => {
                if self.state != CandidateState::NoCandidate {
                    log::debug!("Dropping CUE track candidate: file size unknown");
                }
                self.state = CandidateState::NoCandidate;
                Ok(false)
            }
        }
    }

    /// An `INDEX` directive at `offset` inside track `track`.
    ///
    /// Closes a candidate opened by an earlier track, then opens a new one
    /// if this is a data track and nothing is open.
    pub fn index(
        &mut self,
        offset: u64,
        track: i32,
        is_data: bool,
        path: Option<&Path>,
    ) -> Result<bool, ScanError> {
        let mut updated = false;
        if let CandidateState::CandidateOpen { track: open_track, .. } = self.state {
            if open_track != track {
                updated = self.resolve(offset, path)?;
                if self.is_done() {
                    return Ok(updated);
                }
            }
        }

        if is_data && self.state == CandidateState::NoCandidate {
            log::trace!("CUE track {track} candidate opens at {offset}");
            self.state = CandidateState::CandidateOpen {
                start: offset,
                track,
            };
        }
        Ok(updated)
    }

    /// Close the open candidate at `end`; returns whether it became the best.
    fn resolve(&mut self, end: u64, path: Option<&Path>) -> Result<bool, ScanError> {
        let CandidateState::CandidateOpen { start, track } = self.state else {
            return Ok(false);
        };
        self.state = CandidateState::NoCandidate;

        let size = end.checked_sub(start).ok_or_else(|| {
            ScanError::parse(format!(
                "track {track} ends at {end}, before its start at {start}"
            ))
        })?;
        let Some(path) = path else {
            return Ok(false);
        };

        let best_size = self.best.as_ref().map_or(0, |b| b.size);
        if size <= best_size {
            return Ok(false);
        }
        log::debug!(
            "CUE track {track}: offset {start}, size {size} in '{}'",
            path.display()
        );
        self.best = Some(TrackLocation {
            offset: start,
            size,
            path: path.to_path_buf(),
        });
        Ok(true)
    }
}

/// Directory that relative names inside a playlist are resolved against.
pub(crate) fn playlist_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(Path::new(""))
}

/// Find the data track of the CUE sheet at `cue_path`.
///
/// Files named in the sheet are resolved against its directory and sized
/// through `fs`.
pub fn locate_cue_track(
    fs: &dyn Vfs,
    cue_path: &Path,
    first: bool,
) -> Result<TrackLocation, ScanError> {
    let stream = fs.open(cue_path)?;
    log::debug!("Parsing CUE file '{}'...", cue_path.display());

    let cue_dir = playlist_dir(cue_path);
    let mut tokens = Tokenizer::new(stream);
    let mut selector = CueSelector::new(first);

    let mut file: Option<PathBuf> = None;
    let mut file_size: Option<u64> = None;
    let mut track = 0;
    let mut is_data = false;

    while let Some(token) = tokens.next_token()? {
        if token.is("FILE") {
            selector.end_of_file(file_size, file.as_deref())?;
            if selector.is_done() {
                break;
            }

            let name = tokens.expect_token("FILE name")?;
            let path = cue_dir.join(name.as_str());
            file_size = match fs.file_size(&path) {
                Ok(size) => Some(size),
                Err(err) => {
                    log::debug!("Could not size '{}': {err}", path.display());
                    None
                }
            };
            file = Some(path);
            tokens.expect_token("FILE type")?;
        } else if token.is("TRACK") {
            let number = tokens.expect_token("TRACK number")?;
            track = number
                .as_str()
                .parse()
                .map_err(|_| ScanError::parse(format!("invalid TRACK number '{number}'")))?;
            is_data = !tokens.expect_token("TRACK type")?.is("AUDIO");
        } else if token.is("INDEX") {
            tokens.expect_token("INDEX number")?;
            let stamp = tokens.expect_token("INDEX timestamp")?;
            let offset = parse_timestamp(stamp.as_str())?;
            selector.index(offset, track, is_data, file.as_deref())?;
            if selector.is_done() {
                break;
            }
        }
    }

    if !selector.is_done() {
        selector.end_of_file(file_size, file.as_deref())?;
    }

    selector.into_best().ok_or_else(|| {
        ScanError::not_found(format!("no data track in '{}'", cue_path.display()))
    })
}

/// Read `stream` up to the next `FILE` directive and return the named file,
/// resolved against the directory of `cue_path`.
///
/// The stream is only advanced, so repeated calls walk every file of the
/// sheet in order. `None` once the sheet is exhausted.
pub fn next_cue_file(
    stream: &mut dyn ReadSeek,
    cue_path: &Path,
) -> Result<Option<PathBuf>, ScanError> {
    let mut tokens = Tokenizer::new(stream);
    while let Some(token) = tokens.next_token()? {
        if token.is("FILE") {
            let name = tokens.expect_token("FILE name")?;
            return Ok(Some(playlist_dir(cue_path).join(name.as_str())));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "tests/cue_tests.rs"]
mod tests;
