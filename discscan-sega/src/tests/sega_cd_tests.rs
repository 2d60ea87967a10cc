use super::*;
use std::io::Cursor;

/// Build a system header with `GM ` + `code` written at 0x180.
fn make_header(code: &[u8]) -> Vec<u8> {
    let mut data = vec![b' '; 0x200];
    data[..14].copy_from_slice(b"SEGADISCSYSTEM");
    data[0x180..0x183].copy_from_slice(b"GM ");
    data[0x183..0x183 + code.len()].copy_from_slice(code);
    data
}

#[test]
fn test_t_prefix_cut_at_last_hyphen() {
    assert_eq!(normalize("T-6011 -00 ").as_deref(), Some("T-6011"));
}

#[test]
fn test_g_prefix_cut_at_last_hyphen() {
    assert_eq!(normalize("G-6010  -01").as_deref(), Some("G-6010"));
}

#[test]
fn test_vertical_tab_and_form_feed_are_stripped() {
    assert_eq!(normalize("T-60\x0B11\x0C-00").as_deref(), Some("T-6011"));
}

#[test]
fn test_mk_prefix_ntsc() {
    assert_eq!(normalize("MK-4407 -00").as_deref(), Some("4407"));
}

#[test]
fn test_mk_prefix_pal() {
    assert_eq!(normalize("MK-4407 -50").as_deref(), Some("4407-50"));
}

#[test]
fn test_mk_prefix_short_code() {
    assert_eq!(normalize("MK-44").as_deref(), Some("44"));
}

#[test]
fn test_unknown_prefix() {
    assert_eq!(normalize("XX-1234"), None);
    assert_eq!(normalize(""), None);
}

#[test]
fn test_extract_from_header() {
    let mut cursor = Cursor::new(make_header(b"T-6011 -00 "));
    let serial = extract_serial(&mut cursor).unwrap();
    assert_eq!(serial.value, "T-6011");
    assert!(serial.is_exact());
}

#[test]
fn test_extract_stops_at_nul() {
    let mut cursor = Cursor::new(make_header(b"MK-4407\0-50"));
    assert_eq!(extract_serial(&mut cursor).unwrap().value, "4407");
}

#[test]
fn test_extract_unknown_code_is_not_found() {
    let mut cursor = Cursor::new(make_header(b"NOTASERIAL "));
    assert!(extract_serial(&mut cursor).unwrap_err().is_not_found());
}

#[test]
fn test_extract_is_repeatable() {
    let mut cursor = Cursor::new(make_header(b"T-6011 -00 "));
    let first = extract_serial(&mut cursor).unwrap();
    let second = extract_serial(&mut cursor).unwrap();
    assert_eq!(first, second);
}
