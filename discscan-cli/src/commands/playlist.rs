use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use discscan_lib::util::format_bytes_approx;
use discscan_lib::{
    LocalFs, PlaylistKind, ScanError, ScanOptions, Vfs, list_playlist_files, locate_cue_track,
    locate_gdi_track,
};

use crate::CliError;

/// Show the data track the identifier would read from `playlist`.
pub(crate) fn run_track(playlist: &Path, options: &ScanOptions) -> Result<(), CliError> {
    let fs = LocalFs;
    let mode = if options.first_track {
        "First"
    } else {
        "Largest"
    };

    match PlaylistKind::from_path(playlist) {
        Some(PlaylistKind::Cue) => {
            let track = locate_cue_track(&fs, playlist, options.first_track)?;
            log::info!(
                "{} data track of {}:",
                mode.if_supports_color(Stdout, |t| t.bold()),
                playlist.display(),
            );
            log::info!(
                "  File:   {}",
                track.path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
            log::info!("  Offset: {}", track.offset);
            log::info!(
                "  Size:   {} ({})",
                track.size,
                format_bytes_approx(track.size)
            );
        }
        Some(PlaylistKind::Gdi) => {
            let path = locate_gdi_track(&fs, playlist, options.first_track)?;
            let size = fs.file_size(&path)?;
            log::info!(
                "{} data track of {}:",
                mode.if_supports_color(Stdout, |t| t.bold()),
                playlist.display(),
            );
            log::info!(
                "  File:   {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
            );
            log::info!("  Size:   {size} ({})", format_bytes_approx(size));
        }
        None => return Err(not_a_playlist(playlist)),
    }
    Ok(())
}

/// List every track file of `playlist` in order.
pub(crate) fn run_files(playlist: &Path) -> Result<(), CliError> {
    let fs = LocalFs;
    let files = list_playlist_files(&fs, playlist)?;
    if files.is_empty() {
        log::warn!("{} references no files", playlist.display());
        return Ok(());
    }

    for file in &files {
        let status = if fs.file_size(file).is_ok() {
            String::new()
        } else {
            format!(" {}", "(missing)".if_supports_color(Stdout, |t| t.red()))
        };
        log::info!("{}{status}", file.display());
    }
    Ok(())
}

fn not_a_playlist(path: &Path) -> CliError {
    ScanError::unsupported(format!("'{}' is not a CUE or GDI playlist", path.display())).into()
}
