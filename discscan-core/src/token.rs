//! Whitespace- and quote-aware tokenizer shared by the CUE and GDI scanners.
//!
//! The tokenizer pulls one byte at a time from its reader and never reads
//! ahead, so a caller-owned stream is left positioned directly after the
//! terminator of the last token returned.

use std::io::{ErrorKind, Read};

use crate::ScanError;
use crate::util::latin1_string;

/// Default upper bound on the length of a single token, in bytes.
pub const MAX_TOKEN_LEN: usize = 255;

/// One whitespace-delimited (or quoted) token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    truncated: bool,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True if the source token was longer than the tokenizer's bound and
    /// the tail was dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Case-insensitive comparison against a directive keyword.
    pub fn is(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Reads [`Token`]s from a byte stream.
pub struct Tokenizer<R> {
    reader: R,
    max_len: usize,
}

impl<R: Read> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_len(reader, MAX_TOKEN_LEN)
    }

    pub fn with_max_len(reader: R, max_len: usize) -> Self {
        Self { reader, max_len }
    }

    /// Read the next token, or `None` at end of stream.
    ///
    /// A token that reaches `max_len` bytes is truncated: the rest of it is
    /// consumed and discarded, and the returned token is flagged. End of
    /// stream inside a quoted token is a parse error.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        let mut buf: Vec<u8> = Vec::new();
        let mut quoted = false;
        let mut truncated = false;

        loop {
            let Some(byte) = self.read_byte()? else {
                if quoted {
                    return Err(ScanError::parse(format!(
                        "unterminated quoted token \"{}",
                        latin1_string(&buf)
                    )));
                }
                if buf.is_empty() {
                    return Ok(None);
                }
                break;
            };

            match byte {
                b' ' | b'\t' | b'\r' | b'\n' if !quoted => {
                    if buf.is_empty() {
                        continue;
                    }
                    break;
                }
                b'"' => {
                    if !quoted && buf.is_empty() {
                        quoted = true;
                        continue;
                    }
                    break;
                }
                _ => {
                    if buf.len() < self.max_len {
                        buf.push(byte);
                    } else {
                        truncated = true;
                    }
                }
            }
        }

        Ok(Some(Token {
            text: latin1_string(&buf),
            truncated,
        }))
    }

    /// Read the next token, treating end of stream as a parse error.
    ///
    /// `what` names the missing operand in the error message.
    pub fn expect_token(&mut self, what: &str) -> Result<Token, ScanError> {
        self.next_token()?
            .ok_or_else(|| ScanError::parse(format!("unexpected end of stream, expected {what}")))
    }

    fn read_byte(&mut self) -> Result<Option<u8>, ScanError> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::WouldBlock) => {
                    continue;
                }
                Err(e) => return Err(ScanError::Io(e)),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod tests;
