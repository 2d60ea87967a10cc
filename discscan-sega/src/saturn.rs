//! Sega Saturn serial extraction.
//!
//! The IP.BIN system area at the start of the data track holds the product
//! number at 0x20 and the area symbols at 0x40. Only the first area symbol
//! is used to pick a redump naming rule.

use discscan_core::util::{header_string, read_exact_at, read_up_to, trim_blanks};
use discscan_core::{ReadSeek, ScanError, Serial};

const PRODUCT_NUMBER_OFFSET: u64 = 0x20;
const PRODUCT_NUMBER_LEN: usize = 9;
const AREA_SYMBOL_OFFSET: u64 = 0x40;

/// Convert a raw product number to the redump form for `region`.
///
/// | Region | Rule | Example |
/// |---|---|---|
/// | `U` | drop a leading `MK-` | `MK-81060` → `81060` |
/// | `E` | append `-50` | `MK-81009` → `MK-81009-50` |
/// | `J` | unchanged | `GS-9001` → `GS-9001` |
pub fn normalize(raw: &str, region: u8) -> Option<String> {
    let code = trim_blanks(raw);
    match region {
        b'U' => Some(code.strip_prefix("MK-").unwrap_or(code).to_string()),
        b'E' => Some(format!("{code}-50")),
        b'J' => Some(code.to_string()),
        _ => None,
    }
}

/// Extract the serial of a Saturn disc image.
pub fn extract_serial(reader: &mut dyn ReadSeek) -> Result<Serial, ScanError> {
    let field = read_up_to(reader, PRODUCT_NUMBER_OFFSET, PRODUCT_NUMBER_LEN)?;
    if field.is_empty() {
        return Err(ScanError::not_found("Saturn header is truncated"));
    }
    let raw = header_string(&field);

    let region = read_exact_at(reader, AREA_SYMBOL_OFFSET, 1)?
        .and_then(|b| b.first().copied())
        .ok_or_else(|| ScanError::not_found("Saturn header has no area symbols"))?;

    normalize(&raw, region).map(Serial::exact).ok_or_else(|| {
        ScanError::not_found(format!(
            "unsupported Saturn area symbol '{}'",
            region.escape_ascii()
        ))
    })
}

#[cfg(test)]
#[path = "tests/saturn_tests.rs"]
mod tests;
