//! Console detection by fixed-offset magic numbers.

use std::io::{Read, SeekFrom};

use discscan_core::{ReadSeek, ScanError, System};

/// A byte pattern that identifies a console family at a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicEntry {
    pub offset: u64,
    pub system: System,
    pub magic: &'static [u8],
}

/// Known signatures, checked in order. `PSP GAME` must precede
/// `PLAYSTATION` since both live at 0x8008.
pub static MAGIC_NUMBERS: &[MagicEntry] = &[
    MagicEntry {
        offset: 0x8008,
        system: System::Psp,
        magic: b"PSP GAME",
    },
    MagicEntry {
        offset: 0x8008,
        system: System::Ps1,
        magic: b"PLAYSTATION",
    },
    MagicEntry {
        offset: 0x001C,
        system: System::GameCube,
        magic: &[0xC2, 0x33, 0x9F, 0x3D],
    },
    MagicEntry {
        offset: 0,
        system: System::SegaCd,
        magic: b"SEGADISCSYSTEM",
    },
    MagicEntry {
        offset: 0,
        system: System::Saturn,
        magic: b"SEGA SEGASATURN",
    },
    MagicEntry {
        offset: 0,
        system: System::Dreamcast,
        magic: b"SEGA SEGAKATANA",
    },
];

/// Identify the console family of a disc image.
///
/// Entries whose offset cannot be reached, or whose bytes run past the end
/// of the stream, are skipped. `None` when nothing matches.
pub fn detect_system(stream: &mut dyn ReadSeek) -> Result<Option<System>, ScanError> {
    for entry in MAGIC_NUMBERS {
        if let Err(err) = stream.seek(SeekFrom::Start(entry.offset)) {
            log::trace!("Skipping {} signature: {err}", entry.system.short_name());
            continue;
        }

        let mut buf = Vec::with_capacity(entry.magic.len());
        (&mut *stream)
            .take(entry.magic.len() as u64)
            .read_to_end(&mut buf)?;

        if buf == entry.magic {
            log::debug!(
                "Matched {} signature at {:#x}",
                entry.system.short_name(),
                entry.offset
            );
            return Ok(Some(entry.system));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "tests/signature_tests.rs"]
mod tests;
