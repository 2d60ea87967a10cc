//! Nintendo GameCube serial extraction.
//!
//! The disc header opens with a 4-character game code (`GALE`, `GZLP`, ...).
//! Redump names GameCube discs `DL-DOL-<code>-<region>`, where the region
//! suffix follows from the fourth character of the code.

use discscan_core::util::{latin1_string, read_exact_at};
use discscan_core::{Confidence, ReadSeek, ScanError, Serial};

const GAME_CODE_LEN: usize = 4;

const SERIAL_PREFIX: &str = "DL-DOL-";

/// Map the region character of a game code to its redump suffix.
///
/// `P` and `X` cover every European release whose disc does not carry a
/// country-specific code, so the suffix they produce is a best guess.
pub fn region_suffix(region: u8) -> Option<(&'static str, Confidence)> {
    let exact = |suffix| Some((suffix, Confidence::Exact));
    match region {
        b'E' => exact("-USA"),
        b'J' => exact("-JPN"),
        b'P' | b'X' => Some(("-EUR", Confidence::Approximate)),
        b'Y' => exact("-FAH"),
        b'D' => exact("-NOE"),
        b'S' => exact("-ESP"),
        b'F' => exact("-FRA"),
        b'I' => exact("-ITA"),
        b'H' => exact("-HOL"),
        _ => None,
    }
}

/// Build the redump serial for a 4-byte game code.
pub fn serial_from_game_code(code: &[u8; GAME_CODE_LEN]) -> Option<Serial> {
    let (suffix, confidence) = region_suffix(code[3])?;
    Some(Serial {
        value: format!("{SERIAL_PREFIX}{}{suffix}", latin1_string(code)),
        confidence,
    })
}

/// Extract the serial of a GameCube disc image.
pub fn extract_serial(reader: &mut dyn ReadSeek) -> Result<Serial, ScanError> {
    let code: [u8; GAME_CODE_LEN] = read_exact_at(reader, 0, GAME_CODE_LEN)?
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| ScanError::not_found("GameCube header is truncated"))?;

    serial_from_game_code(&code).ok_or_else(|| {
        ScanError::not_found(format!(
            "unknown GameCube region code '{}'",
            code[3].escape_ascii()
        ))
    })
}

#[cfg(test)]
#[path = "tests/gamecube_tests.rs"]
mod tests;
