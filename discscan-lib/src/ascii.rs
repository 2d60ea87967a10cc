//! Generic ASCII serial search, for discs without a dedicated decoder.
//!
//! Looks for the first short run of `[A-Z0-9-]` near the start of the image,
//! which for Wii and similar discs is the game id.

use discscan_core::util::{latin1_string, read_up_to, until_nul};
use discscan_core::{ReadSeek, ScanError, Serial};

/// Number of start offsets tried.
const SCAN_LEN: usize = 10_000;

/// Bytes examined at each offset.
const WINDOW_LEN: usize = 15;

fn is_serial_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'-'
}

/// Find the first run of 4 to 8 serial characters starting within the
/// first [`SCAN_LEN`] bytes of `data`.
///
/// WBFS containers open with the `WBFS` magic, which would otherwise be the
/// first hit, so a window reading exactly `WBFS` is skipped.
pub fn find_serial(data: &[u8]) -> Option<String> {
    (0..SCAN_LEN.min(data.len())).find_map(|pos| {
        let window = &data[pos..(pos + WINDOW_LEN).min(data.len())];
        if until_nul(window) == b"WBFS" {
            return None;
        }
        let run = window.iter().take_while(|&&b| is_serial_byte(b)).count();
        (run > 3 && run < 9).then(|| latin1_string(&window[..run]))
    })
}

/// Extract an ASCII serial from the start of a disc image.
pub fn extract_serial(reader: &mut dyn ReadSeek) -> Result<Serial, ScanError> {
    let data = read_up_to(reader, 0, SCAN_LEN + WINDOW_LEN - 1)?;
    find_serial(&data)
        .map(Serial::exact)
        .ok_or_else(|| ScanError::not_found("no ASCII serial near the start of the image"))
}

#[cfg(test)]
#[path = "tests/ascii_tests.rs"]
mod tests;
