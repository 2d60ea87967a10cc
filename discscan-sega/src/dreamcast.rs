//! Sega Dreamcast serial extraction.
//!
//! The product number lives at 0x40 of IP.BIN, the system area at the start
//! of the high-density data track. Raw values are inconsistent about
//! spacing and hyphenation, so each publisher prefix gets its own rule to
//! reach the redump form.

use discscan_core::util::{header_string, is_c_space, read_up_to, trim_blanks};
use discscan_core::{ReadSeek, ScanError, Serial};

const PRODUCT_NUMBER_OFFSET: u64 = 0x40;
const PRODUCT_NUMBER_LEN: usize = 10;

/// Trim, collapse runs of spaces, and turn the remaining whitespace into
/// hyphens: `"T-1402N 50 "` → `T-1402N-50`.
fn canonical_chars(raw: &str) -> Vec<char> {
    let trimmed: Vec<char> = trim_blanks(raw).chars().collect();
    let mut out = Vec::with_capacity(trimmed.len());
    for (i, &c) in trimmed.iter().enumerate() {
        if c == ' ' && trimmed.get(i + 1) == Some(&' ') {
            continue;
        }
        out.push(if is_c_space(c) { '-' } else { c });
    }
    out
}

fn hyphens(chars: &[char]) -> usize {
    chars.iter().filter(|&&c| c == '-').count()
}

fn last_hyphen(chars: &[char]) -> Option<usize> {
    chars.iter().rposition(|&c| c == '-')
}

fn text(chars: &[char]) -> String {
    chars.iter().collect()
}

/// `head` + `-` + the last `n` chars of `chars`.
fn join_tail(head: &[char], chars: &[char], n: usize) -> String {
    let tail = &chars[chars.len().saturating_sub(n)..];
    format!("{}-{}", text(head), text(tail))
}

/// Convert a raw product number to the redump form.
///
/// Codes starting with `T-`, `T`, `HDR-` or `MK-` are handled. An `MK-`
/// code longer than eight characters is reported as
/// [`ScanError::Unsupported`]; any other prefix as [`ScanError::NotFound`].
pub fn normalize(raw: &str) -> Result<String, ScanError> {
    let code = canonical_chars(raw);
    let len = code.len();
    let count = hyphens(&code);

    if code.starts_with(&['T', '-']) {
        return match count {
            1 if len > 7 => Ok(join_tail(&code[..7], &code, 2)),
            _ => Ok(text(&code)),
        };
    }

    if code.starts_with(&['T']) {
        let mut pre = vec!['T', '-'];
        pre.extend_from_slice(&code[1..]);
        let pre_len = pre.len();
        return match hyphens(&pre) {
            n if n >= 2 => {
                let idx = last_hyphen(&pre).unwrap_or(pre_len);
                Ok(join_tail(&pre[..idx], &pre, 2))
            }
            _ if pre_len - 1 <= 8 => Ok(text(&pre)),
            _ => Ok(join_tail(&pre[..7], &pre, 3)),
        };
    }

    if code.starts_with(&['H', 'D', 'R', '-']) {
        if count >= 2 {
            let idx = last_hyphen(&code).unwrap_or(len);
            return Ok(join_tail(&code[..idx.saturating_sub(1)], &code, 4));
        }
        return Ok(text(&code));
    }

    if code.starts_with(&['M', 'K', '-']) {
        if len <= 8 {
            return Ok(text(&code));
        }
        return Err(ScanError::unsupported(format!(
            "Dreamcast product number '{}' has no redump mapping",
            text(&code)
        )));
    }

    Err(ScanError::not_found(format!(
        "unrecognized Dreamcast product number '{}'",
        text(&code)
    )))
}

/// Extract the serial of a Dreamcast disc image.
pub fn extract_serial(reader: &mut dyn ReadSeek) -> Result<Serial, ScanError> {
    let field = read_up_to(reader, PRODUCT_NUMBER_OFFSET, PRODUCT_NUMBER_LEN)?;
    if field.is_empty() {
        return Err(ScanError::not_found("Dreamcast header is truncated"));
    }
    let raw = header_string(&field);
    log::debug!("Dreamcast: raw product number '{raw}'");
    normalize(&raw).map(Serial::exact)
}

#[cfg(test)]
#[path = "tests/dreamcast_tests.rs"]
mod tests;
