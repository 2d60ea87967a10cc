use super::*;
use std::io::Cursor;

fn image_with(magic: &[u8], offset: usize) -> Vec<u8> {
    let mut data = vec![0u8; 0x9000];
    data[offset..offset + magic.len()].copy_from_slice(magic);
    data
}

#[test]
fn test_psp_game() {
    let mut cursor = Cursor::new(image_with(b"PSP GAME", 0x8008));
    assert_eq!(detect_system(&mut cursor).unwrap(), Some(System::Psp));
}

#[test]
fn test_playstation() {
    let mut cursor = Cursor::new(image_with(b"PLAYSTATION", 0x8008));
    assert_eq!(detect_system(&mut cursor).unwrap(), Some(System::Ps1));
}

#[test]
fn test_gamecube_magic() {
    let mut cursor = Cursor::new(image_with(&[0xC2, 0x33, 0x9F, 0x3D], 0x1C));
    assert_eq!(detect_system(&mut cursor).unwrap(), Some(System::GameCube));
}

#[test]
fn test_sega_families() {
    let cases = [
        (&b"SEGADISCSYSTEM  "[..], System::SegaCd),
        (&b"SEGA SEGASATURN "[..], System::Saturn),
        (&b"SEGA SEGAKATANA "[..], System::Dreamcast),
    ];
    for (magic, system) in cases {
        let mut cursor = Cursor::new(image_with(magic, 0));
        assert_eq!(detect_system(&mut cursor).unwrap(), Some(system));
    }
}

#[test]
fn test_no_match() {
    let mut cursor = Cursor::new(vec![0u8; 0x9000]);
    assert_eq!(detect_system(&mut cursor).unwrap(), None);
}

#[test]
fn test_short_stream_skips_far_entries() {
    // Too short for the 0x8008 entries; the Sega entry at 0 still matches.
    let mut cursor = Cursor::new(b"SEGA SEGASATURN ".to_vec());
    assert_eq!(detect_system(&mut cursor).unwrap(), Some(System::Saturn));

    let mut empty = Cursor::new(Vec::new());
    assert_eq!(detect_system(&mut empty).unwrap(), None);
}

#[test]
fn test_detection_is_repeatable() {
    let mut cursor = Cursor::new(image_with(b"PLAYSTATION", 0x8008));
    let first = detect_system(&mut cursor).unwrap();
    assert_eq!(detect_system(&mut cursor).unwrap(), first);
}

#[test]
fn test_table_order_puts_psp_before_ps1() {
    let psp = MAGIC_NUMBERS
        .iter()
        .position(|e| e.system == System::Psp)
        .unwrap();
    let ps1 = MAGIC_NUMBERS
        .iter()
        .position(|e| e.system == System::Ps1)
        .unwrap();
    assert!(psp < ps1);
}
