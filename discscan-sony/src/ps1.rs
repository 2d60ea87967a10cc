//! PlayStation (PS1/PSX) serial extraction.
//!
//! Walks just enough of the ISO 9660 filesystem to reach `SYSTEM.CNF;1`,
//! then turns its `BOOT` line into a serial. Works on cooked 2048-byte ISO
//! images and on raw 2352-byte BIN tracks, with or without interleaved
//! 96-byte subchannel data.

use discscan_core::util::{read_exact_at, read_up_to, stream_len, until_nul};
use discscan_core::{ReadSeek, ScanError, Serial};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// First four bytes of the CD sync pattern that opens every raw sector.
const CD_SYNC_PREFIX: [u8; 4] = [0x00, 0xFF, 0xFF, 0xFF];

/// Standard ISO 9660 sector size (user data only).
const ISO_SECTOR_SIZE: u64 = 2048;

/// Raw CD sector size (sync + header + subheader + data + EDC + ECC).
const RAW_SECTOR_SIZE: u64 = 2352;

/// Raw sector plus 96 bytes of subchannel data.
const RAW_SUBCHANNEL_SECTOR_SIZE: u64 = 2448;

/// Offset to user data within a Mode 2 Form 1 raw sector.
/// 12 (sync) + 4 (header) + 8 (subheader) = 24.
const MODE2_FORM1_DATA_OFFSET: u64 = 24;

/// ISO 9660 Primary Volume Descriptor is always at sector 16.
const PVD_SECTOR: u64 = 16;

/// Offset of the root directory record within the PVD.
const ROOT_RECORD_OFFSET: u64 = 156;

/// Root directory bytes examined when looking for SYSTEM.CNF.
const DIRECTORY_SCAN_LEN: usize = 2048 * 2;

/// SYSTEM.CNF bytes examined when looking for the BOOT line.
const SYSTEM_CNF_SCAN_LEN: usize = 256;

/// Offset of the file identifier within a directory record.
const RECORD_IDENTIFIER_OFFSET: usize = 33;

const SYSTEM_CNF_IDENTIFIER: &[u8] = b"SYSTEM.CNF;1";

// ---------------------------------------------------------------------------
// Sector layout
// ---------------------------------------------------------------------------

/// How sectors are laid out in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorLayout {
    /// Cooked Mode 1 ISO, 2048 bytes of user data per sector.
    Iso2048,
    /// Raw BIN, 2352 bytes per sector.
    Raw2352,
    /// Raw BIN with subchannel data mixed in, 2448 bytes per sector.
    Raw2448,
}

impl SectorLayout {
    pub fn frame_size(&self) -> u64 {
        match self {
            Self::Iso2048 => ISO_SECTOR_SIZE,
            Self::Raw2352 => RAW_SECTOR_SIZE,
            Self::Raw2448 => RAW_SUBCHANNEL_SECTOR_SIZE,
        }
    }

    /// Bytes to skip from the start of a frame to its user data.
    pub fn data_offset(&self) -> u64 {
        match self {
            Self::Iso2048 => 0,
            Self::Raw2352 | Self::Raw2448 => MODE2_FORM1_DATA_OFFSET,
        }
    }

    /// Absolute image offset of the user data of `sector`.
    fn sector_offset(&self, sector: u64) -> Option<u64> {
        sector
            .checked_mul(self.frame_size())?
            .checked_add(self.data_offset())
    }
}

/// Guess the sector layout of an image.
///
/// With `subchannel` set the image is assumed to carry 2448-byte frames.
/// Otherwise an image whose size is a multiple of 2048 and which does not
/// open with a raw sync pattern is treated as a cooked ISO; anything else
/// is a raw 2352-byte BIN.
pub fn detect_layout(
    reader: &mut dyn ReadSeek,
    subchannel: bool,
) -> Result<SectorLayout, ScanError> {
    let size = stream_len(reader)?;
    if subchannel {
        return Ok(SectorLayout::Raw2448);
    }
    if size % ISO_SECTOR_SIZE == 0 {
        let opens_with_sync = read_exact_at(reader, 0, CD_SYNC_PREFIX.len())?
            .is_some_and(|head| head == CD_SYNC_PREFIX);
        if !opens_with_sync {
            return Ok(SectorLayout::Iso2048);
        }
    }
    Ok(SectorLayout::Raw2352)
}

// ---------------------------------------------------------------------------
// Directory walk
// ---------------------------------------------------------------------------

/// Little-endian 24-bit sector number, as stored in the low bytes of an
/// ISO 9660 both-endian extent field.
fn lba24(bytes: &[u8]) -> Option<u64> {
    match bytes {
        [a, b, c, ..] => Some(*a as u64 | (*b as u64) << 8 | (*c as u64) << 16),
        _ => None,
    }
}

/// Locate the extent of `SYSTEM.CNF;1` in the root directory.
fn find_system_cnf(
    reader: &mut dyn ReadSeek,
    layout: SectorLayout,
) -> Result<Option<u64>, ScanError> {
    let Some(pvd_data) = layout.sector_offset(PVD_SECTOR) else {
        return Ok(None);
    };
    let Some(root_record) = read_exact_at(reader, pvd_data + ROOT_RECORD_OFFSET, 6)? else {
        return Ok(None);
    };
    let Some(root_offset) = lba24(&root_record[2..]).and_then(|lba| layout.sector_offset(lba))
    else {
        return Ok(None);
    };

    let directory = read_up_to(reader, root_offset, DIRECTORY_SCAN_LEN)?;
    let mut pos = 0;
    while pos < directory.len() {
        let record_len = directory[pos] as usize;
        if record_len == 0 {
            return Ok(None);
        }

        let id_start = pos + RECORD_IDENTIFIER_OFFSET;
        let identifier = directory.get(id_start..id_start + SYSTEM_CNF_IDENTIFIER.len());
        if identifier.is_some_and(|id| id.eq_ignore_ascii_case(SYSTEM_CNF_IDENTIFIER)) {
            return Ok(directory.get(pos + 2..).and_then(lba24));
        }

        pos += record_len;
    }
    Ok(None)
}

// ---------------------------------------------------------------------------
// SYSTEM.CNF parsing
// ---------------------------------------------------------------------------

/// Turn the contents of SYSTEM.CNF into a serial.
///
/// Finds the first `boot` key (case-insensitive, so `BOOT2` matches too),
/// takes the executable name after the last `\` or `:` on that line, and
/// formats it as four uppercased characters, a hyphen, and the following
/// alphanumeric run with any `.` dropped:
///
/// - `BOOT = cdrom:\SLUS_012.34;1` → `SLUS-01234`
/// - `BOOT=cdrom:SCES_000.01;1` → `SCES-00001`
pub fn serial_from_system_cnf(content: &[u8]) -> Option<String> {
    let text = until_nul(content);
    let boot = text
        .windows(4)
        .position(|w| w.eq_ignore_ascii_case(b"boot"))?;

    let line_end = text[boot..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(text.len(), |n| boot + n);
    let file_start = text[boot..line_end]
        .iter()
        .rposition(|&b| b == b'\\' || b == b':')
        .map_or(boot, |n| boot + n + 1);

    let prefix = text.get(file_start..file_start + 4)?;
    let mut serial: String = prefix
        .iter()
        .map(|&b| b.to_ascii_uppercase() as char)
        .collect();
    serial.push('-');

    let mut pos = file_start + 4;
    if text.get(pos).is_some_and(|b| !b.is_ascii_alphanumeric()) {
        pos += 1;
    }
    let digits_start = serial.len();
    while let Some(&b) = text.get(pos).filter(|b| b.is_ascii_alphanumeric()) {
        serial.push(b as char);
        pos += 1;
        if text.get(pos) == Some(&b'.') {
            pos += 1;
        }
    }

    (serial.len() > digits_start).then_some(serial)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn extract_with_layout(
    reader: &mut dyn ReadSeek,
    subchannel: bool,
) -> Result<Option<String>, ScanError> {
    let layout = detect_layout(reader, subchannel)?;
    let Some(cnf_lba) = find_system_cnf(reader, layout)? else {
        log::debug!("PS1: SYSTEM.CNF;1 not found ({layout:?})");
        return Ok(None);
    };
    let Some(cnf_offset) = layout.sector_offset(cnf_lba) else {
        return Ok(None);
    };
    let content = read_up_to(reader, cnf_offset, SYSTEM_CNF_SCAN_LEN)?;
    Ok(serial_from_system_cnf(&content))
}

/// Extract the serial of a PS1 disc image.
///
/// Tries the plain sector layout first, then assumes interleaved
/// subchannel data.
pub fn extract_serial(reader: &mut dyn ReadSeek) -> Result<Serial, ScanError> {
    for subchannel in [false, true] {
        if let Some(serial) = extract_with_layout(reader, subchannel)? {
            return Ok(Serial::exact(serial));
        }
    }
    Err(ScanError::not_found("no PS1 boot executable in SYSTEM.CNF"))
}

#[cfg(test)]
#[path = "tests/ps1_tests.rs"]
mod tests;
