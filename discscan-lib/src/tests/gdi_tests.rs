use super::*;
use discscan_core::MemoryFs;
use std::io::Cursor;

const GDI: &str = "3\n\
1 0 4 2352 track01.bin 0\n\
2 756 0 2352 track02.raw 0\n\
3 45000 4 2352 \"track 03.bin\" 0\n";

fn gdi_path() -> &'static Path {
    Path::new("/dc/game.gdi")
}

fn fs_with(gdi: &str, files: &[(&str, usize)]) -> MemoryFs {
    let mut fs = MemoryFs::new();
    fs.insert("/dc/game.gdi", gdi.as_bytes().to_vec());
    for (name, size) in files {
        fs.insert(format!("/dc/{name}"), vec![0u8; *size]);
    }
    fs
}

#[test]
fn test_audio_track_classification() {
    let audio = GdiEntry {
        mode: 0,
        sector_size: 2352,
        path: PathBuf::from("t.raw"),
    };
    assert!(!audio.is_data());
    assert!(GdiEntry { mode: 4, ..audio.clone() }.is_data());
    assert!(GdiEntry { sector_size: 2048, ..audio }.is_data());
}

#[test]
fn test_largest_data_track_wins() {
    let fs = fs_with(
        GDI,
        &[("track01.bin", 1000), ("track02.raw", 99_999), ("track 03.bin", 5000)],
    );
    let track = locate_gdi_track(&fs, gdi_path(), false).unwrap();
    assert_eq!(track, PathBuf::from("/dc/track 03.bin"));
}

#[test]
fn test_first_data_track_wins() {
    let fs = fs_with(
        GDI,
        &[("track01.bin", 1000), ("track02.raw", 99_999), ("track 03.bin", 5000)],
    );
    let track = locate_gdi_track(&fs, gdi_path(), true).unwrap();
    assert_eq!(track, PathBuf::from("/dc/track01.bin"));
}

#[test]
fn test_audio_excluded_even_when_largest() {
    let gdi = "2\n1 0 0 2352 audio.raw 0\n2 600 4 2048 data.iso 0\n";
    let fs = fs_with(gdi, &[("audio.raw", 1_000_000), ("data.iso", 2048)]);
    let track = locate_gdi_track(&fs, gdi_path(), false).unwrap();
    assert_eq!(track, PathBuf::from("/dc/data.iso"));
}

#[test]
fn test_empty_gdi_is_not_found() {
    let fs = fs_with("", &[]);
    assert!(matches!(
        locate_gdi_track(&fs, gdi_path(), true).unwrap_err(),
        ScanError::NotFound(_)
    ));
}

#[test]
fn test_audio_only_gdi_is_not_found() {
    let fs = fs_with("1\n1 0 0 2352 audio.raw 0\n", &[("audio.raw", 100)]);
    assert!(matches!(
        locate_gdi_track(&fs, gdi_path(), true).unwrap_err(),
        ScanError::NotFound(_)
    ));
}

#[test]
fn test_truncated_entry_is_parse_error() {
    let fs = fs_with("1\n1 0 4\n", &[]);
    assert!(matches!(
        locate_gdi_track(&fs, gdi_path(), true).unwrap_err(),
        ScanError::Parse(_)
    ));
}

#[test]
fn test_non_numeric_mode_is_parse_error() {
    let fs = fs_with("1\n1 0 four 2352 t.bin 0\n", &[("t.bin", 10)]);
    assert!(matches!(
        locate_gdi_track(&fs, gdi_path(), true).unwrap_err(),
        ScanError::Parse(_)
    ));
}

#[test]
fn test_missing_data_file_is_io_error() {
    let fs = fs_with("1\n1 0 4 2352 gone.bin 0\n", &[]);
    assert!(matches!(
        locate_gdi_track(&fs, gdi_path(), true).unwrap_err(),
        ScanError::Io(_)
    ));
}

#[test]
fn test_next_gdi_file_walks_all_tracks() {
    let mut stream = Cursor::new(GDI.as_bytes().to_vec());
    let mut files = Vec::new();
    while let Some(file) = next_gdi_file(&mut stream, gdi_path()).unwrap() {
        files.push(file);
    }
    assert_eq!(
        files,
        vec![
            PathBuf::from("/dc/track01.bin"),
            PathBuf::from("/dc/track02.raw"),
            PathBuf::from("/dc/track 03.bin"),
        ]
    );
}

#[test]
fn test_first_track_returns_before_truncated_entry() {
    let fs = fs_with("2\n1 0 4 2352 a.bin 0\n2 0 4\n", &[("a.bin", 100)]);

    assert_eq!(
        locate_gdi_track(&fs, gdi_path(), true).unwrap(),
        PathBuf::from("/dc/a.bin")
    );

    let err = locate_gdi_track(&fs, gdi_path(), false).unwrap_err();
    assert!(matches!(err, ScanError::Parse(_)), "{err}");
}
