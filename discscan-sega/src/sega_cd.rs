//! Sega CD / Mega CD serial extraction.
//!
//! The product code sits in the system header of the first data sector,
//! right after the `GM ` software-type tag at 0x180.

use discscan_core::util::{header_string, is_c_space, read_up_to};
use discscan_core::{ReadSeek, ScanError, Serial};

/// Offset of the product code field (after the 3-byte type tag).
const SERIAL_OFFSET: u64 = 0x183;

/// Product code field length.
const SERIAL_LEN: usize = 11;

/// Convert a raw header product code to the redump form.
///
/// - `T-` and `G-` codes keep everything before the last hyphen
///   (`T-6011 -00` → `T-6011`).
/// - `MK-` codes keep the four digits after the prefix, plus `-50` for PAL
///   releases (`MK-4407 -50` → `4407-50`).
///
/// Returns `None` for any other prefix.
pub fn normalize(raw: &str) -> Option<String> {
    let code: String = raw.chars().filter(|&c| !is_c_space(c)).collect();

    if code.starts_with("T-") || code.starts_with("G-") {
        let last_hyphen = code.rfind('-')?;
        return Some(code[..last_hyphen].to_string());
    }

    if let Some(rest) = code.strip_prefix("MK-") {
        let digits: String = rest.chars().take(4).collect();
        return Some(if code.ends_with("50") {
            format!("{digits}-50")
        } else {
            digits
        });
    }

    None
}

/// Extract the serial of a Sega CD disc image.
pub fn extract_serial(reader: &mut dyn ReadSeek) -> Result<Serial, ScanError> {
    let field = read_up_to(reader, SERIAL_OFFSET, SERIAL_LEN)?;
    let raw = header_string(&field);
    log::debug!("Sega CD: raw product code '{raw}'");
    normalize(&raw)
        .map(Serial::exact)
        .ok_or_else(|| ScanError::not_found(format!("unrecognized Sega CD product code '{raw}'")))
}

#[cfg(test)]
#[path = "tests/sega_cd_tests.rs"]
mod tests;
