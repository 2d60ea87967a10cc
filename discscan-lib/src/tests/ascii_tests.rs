use super::*;
use std::io::Cursor;

#[test]
fn test_wii_game_id() {
    let mut data = b"RMCE01".to_vec();
    data.resize(0x100, 0);
    assert_eq!(find_serial(&data).as_deref(), Some("RMCE01"));
}

#[test]
fn test_wbfs_magic_skipped() {
    let mut data = vec![0u8; 0x300];
    data[..4].copy_from_slice(b"WBFS");
    data[0x200..0x206].copy_from_slice(b"RSBE01");
    assert_eq!(find_serial(&data).as_deref(), Some("RSBE01"));
}

#[test]
fn test_run_length_bounds() {
    // Three characters is too short, nine too long.
    let mut data = vec![0u8; 64];
    data[0..3].copy_from_slice(b"ABC");
    data[10..19].copy_from_slice(b"ABCDEFGHI");
    // Inside the long run, offset 11 leaves "BCDEFGHI" (8 chars).
    assert_eq!(find_serial(&data).as_deref(), Some("BCDEFGHI"));
}

#[test]
fn test_lowercase_breaks_run() {
    let mut data = vec![0u8; 32];
    data[..6].copy_from_slice(b"ABcdEF");
    assert_eq!(find_serial(&data), None);
}

#[test]
fn test_extract_not_found() {
    let mut cursor = Cursor::new(vec![0u8; 20_000]);
    assert!(extract_serial(&mut cursor).unwrap_err().is_not_found());
}

#[test]
fn test_extract_finds_serial_near_end_of_window() {
    let mut data = vec![0u8; 20_000];
    data[9_999..10_005].copy_from_slice(b"GALE01");
    let mut cursor = Cursor::new(data);
    assert_eq!(extract_serial(&mut cursor).unwrap().value, "GALE01");
}
