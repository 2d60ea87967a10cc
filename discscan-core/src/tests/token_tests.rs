use super::*;
use std::io::{Cursor, Read};

fn collect(input: &[u8], max_len: usize) -> Vec<Token> {
    let mut tokenizer = Tokenizer::with_max_len(Cursor::new(input.to_vec()), max_len);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token().unwrap() {
        tokens.push(token);
    }
    tokens
}

fn texts(input: &[u8]) -> Vec<String> {
    collect(input, MAX_TOKEN_LEN)
        .into_iter()
        .map(Token::into_string)
        .collect()
}

/// Reader that fails with `Interrupted` before every successful byte.
struct Flaky {
    inner: Cursor<Vec<u8>>,
    fail_next: bool,
}

impl Read for Flaky {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.fail_next {
            self.fail_next = false;
            return Err(std::io::Error::from(std::io::ErrorKind::Interrupted));
        }
        self.fail_next = true;
        self.inner.read(buf)
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied))
    }
}

#[test]
fn empty_stream_is_end_of_stream() {
    let mut tokenizer = Tokenizer::new(Cursor::new(Vec::new()));
    assert!(tokenizer.next_token().unwrap().is_none());
}

#[test]
fn whitespace_only_is_end_of_stream() {
    assert!(texts(b" \t\r\n  \n").is_empty());
}

#[test]
fn splits_on_all_whitespace_kinds() {
    assert_eq!(
        texts(b"FILE\tgame.bin\r\nBINARY   TRACK"),
        vec!["FILE", "game.bin", "BINARY", "TRACK"]
    );
}

#[test]
fn single_space_tokens_rejoin_to_input() {
    let input = "TRACK 01 MODE2/2352 INDEX 01 00:00:00";
    let joined = texts(input.as_bytes()).join(" ");
    assert_eq!(joined, input);
}

#[test]
fn trailing_delimiter_is_dropped() {
    let input = "REM COMMENT \n";
    assert_eq!(texts(input.as_bytes()).join(" "), "REM COMMENT");
}

#[test]
fn quoted_token_keeps_spaces_and_strips_quotes() {
    assert_eq!(
        texts(b"FILE \"Final Fantasy (Track 1).bin\" BINARY"),
        vec!["FILE", "Final Fantasy (Track 1).bin", "BINARY"]
    );
}

#[test]
fn empty_quoted_token() {
    assert_eq!(texts(b"\"\" next"), vec!["", "next"]);
}

#[test]
fn quote_terminates_unquoted_token() {
    assert_eq!(texts(b"abc\"def"), vec!["abc", "def"]);
}

#[test]
fn unterminated_quote_is_parse_error() {
    let mut tokenizer = Tokenizer::new(Cursor::new(b"FILE \"game.bin".to_vec()));
    assert_eq!(tokenizer.next_token().unwrap().unwrap().as_str(), "FILE");
    assert!(matches!(tokenizer.next_token(), Err(ScanError::Parse(_))));
}

#[test]
fn token_at_bound_is_intact() {
    let tokens = collect(b"abcd efgh", 4);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].as_str(), "abcd");
    assert!(!tokens[0].is_truncated());
    assert_eq!(tokens[1].as_str(), "efgh");
    assert!(!tokens[1].is_truncated());
}

#[test]
fn token_over_bound_is_truncated() {
    let tokens = collect(b"abcdefgh next", 4);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].as_str(), "abcd");
    assert!(tokens[0].is_truncated());
    assert_eq!(tokens[1].as_str(), "next");
}

#[test]
fn quoted_token_over_bound_is_truncated() {
    let tokens = collect(b"\"long name.bin\" BINARY", 4);
    assert_eq!(tokens[0].as_str(), "long");
    assert!(tokens[0].is_truncated());
    assert_eq!(tokens[1].as_str(), "BINA");
    assert!(tokens[1].is_truncated());
}

#[test]
fn quoted_token_tail_is_discarded_up_to_closing_quote() {
    let tokens = collect(b"\"long name.bin\" BINARY", 6);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].as_str(), "long n");
    assert!(tokens[0].is_truncated());
    assert_eq!(tokens[1].as_str(), "BINARY");
    assert!(!tokens[1].is_truncated());
}

#[test]
fn keyword_match_is_case_insensitive() {
    let tokens = collect(b"index", MAX_TOKEN_LEN);
    assert!(tokens[0].is("INDEX"));
    assert!(!tokens[0].is("TRACK"));
}

#[test]
fn latin1_bytes_decode_to_chars() {
    assert_eq!(texts(b"caf\xe9"), vec!["caf\u{e9}"]);
}

#[test]
fn interrupted_reads_are_retried() {
    let reader = Flaky {
        inner: Cursor::new(b"A B".to_vec()),
        fail_next: true,
    };
    let mut tokenizer = Tokenizer::new(reader);
    assert_eq!(tokenizer.next_token().unwrap().unwrap().as_str(), "A");
    assert_eq!(tokenizer.next_token().unwrap().unwrap().as_str(), "B");
    assert!(tokenizer.next_token().unwrap().is_none());
}

#[test]
fn other_io_errors_surface() {
    let mut tokenizer = Tokenizer::new(Broken);
    assert!(matches!(tokenizer.next_token(), Err(ScanError::Io(_))));
}

#[test]
fn stream_is_left_after_terminator() {
    let mut cursor = Cursor::new(b"one two".to_vec());
    {
        let mut tokenizer = Tokenizer::new(&mut cursor);
        tokenizer.next_token().unwrap();
    }
    assert_eq!(cursor.position(), 4);
}

#[test]
fn expect_token_reports_missing_operand() {
    let mut tokenizer = Tokenizer::new(Cursor::new(b"TRACK".to_vec()));
    tokenizer.next_token().unwrap();
    let err = tokenizer.expect_token("track number").unwrap_err();
    assert!(err.to_string().contains("track number"));
}
