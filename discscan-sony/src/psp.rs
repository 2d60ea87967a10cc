//! PlayStation Portable (PSP) serial extraction.
//!
//! UMD images carry their product code in `UMD_DATA.BIN` and again in
//! `PARAM.SFO`, both near the start of the image. Rather than walk the
//! filesystem, the first 100 KB are searched for a known product-code
//! prefix.

use discscan_core::util::{header_string, read_up_to};
use discscan_core::{ReadSeek, ScanError, Serial};

/// Bytes of the image searched for a product code.
const SEARCH_WINDOW: usize = 100_000;

/// Length of a PSP product code, e.g. "ULUS-10041".
const SERIAL_LEN: usize = 10;

/// Known product-code prefixes: UMD retail (UL/UC) and PSN (NP) titles.
pub const SERIAL_PREFIXES: &[&[u8; 5]] = &[
    b"ULES-", b"ULUS-", b"ULJS-", b"ULEM-", b"ULUM-", b"ULJM-", b"UCES-", b"UCUS-", b"UCJS-",
    b"UCAS-", b"UCKS-", b"ULKS-", b"ULAS-", b"NPEH-", b"NPUH-", b"NPJH-", b"NPHH-", b"NPEG-",
    b"NPUG-", b"NPJG-", b"NPHG-", b"NPEZ-", b"NPUZ-", b"NPJZ-",
];

/// Find the first product code in `data`, looking at start positions below
/// [`SEARCH_WINDOW`].
pub fn find_serial(data: &[u8]) -> Option<String> {
    data.windows(5)
        .take(SEARCH_WINDOW)
        .position(|w| SERIAL_PREFIXES.iter().any(|p| w == p.as_slice()))
        .map(|pos| {
            let end = (pos + SERIAL_LEN).min(data.len());
            header_string(&data[pos..end])
        })
}

/// Extract the product code of a PSP disc image.
pub fn extract_serial(reader: &mut dyn ReadSeek) -> Result<Serial, ScanError> {
    let data = read_up_to(reader, 0, SEARCH_WINDOW + SERIAL_LEN - 1)?;
    find_serial(&data)
        .map(Serial::exact)
        .ok_or_else(|| ScanError::not_found("no PSP product code in the first 100 KB"))
}

#[cfg(test)]
#[path = "tests/psp_tests.rs"]
mod tests;
