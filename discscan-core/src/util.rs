use std::io::{Read, SeekFrom};

use crate::{ReadSeek, ScanError};

/// Format a byte count with fractional KB/MB (e.g., "1.5 KB", "2.3 MB").
pub fn format_bytes_approx(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Decode bytes as Latin-1: every byte maps to the code point of the same value.
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// The prefix of `bytes` before the first NUL (or all of it).
pub fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Read a fixed header field as a Latin-1 string, stopping at the first NUL.
pub fn header_string(bytes: &[u8]) -> String {
    latin1_string(until_nul(bytes))
}

/// Trim spaces and tabs (only) from both ends.
pub fn trim_blanks(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}

/// Whitespace as C's `isspace` sees it, vertical tab and form feed included.
pub fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Seek to `offset` and read up to `len` bytes, stopping early at end of stream.
///
/// Returns an empty buffer when `offset` is at or past the end.
pub fn read_up_to(
    reader: &mut dyn ReadSeek,
    offset: u64,
    len: usize,
) -> Result<Vec<u8>, ScanError> {
    reader.seek(SeekFrom::Start(offset))?;
    let mut buf = Vec::with_capacity(len);
    (&mut *reader).take(len as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Seek to `offset` and read exactly `len` bytes.
///
/// A short read is reported as `Ok(None)` so callers can treat a truncated
/// image as "structure absent" rather than a fault.
pub fn read_exact_at(
    reader: &mut dyn ReadSeek,
    offset: u64,
    len: usize,
) -> Result<Option<Vec<u8>>, ScanError> {
    let buf = read_up_to(reader, offset, len)?;
    Ok((buf.len() == len).then_some(buf))
}

/// Total stream length, found by seeking to the end.
pub fn stream_len(reader: &mut dyn ReadSeek) -> Result<u64, ScanError> {
    Ok(reader.seek(SeekFrom::End(0))?)
}
