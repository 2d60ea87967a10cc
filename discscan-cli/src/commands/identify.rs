use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use discscan_lib::util::format_bytes_approx;
use discscan_lib::{Identification, LocalFs, ScanOptions, identify_path};

use crate::CliError;

/// Identify each input in turn. A failing input is reported and the rest
/// are still processed.
pub(crate) fn run_identify(
    paths: &[PathBuf],
    options: &ScanOptions,
    json: bool,
) -> Result<(), CliError> {
    let fs = LocalFs;
    let mut failed = 0usize;

    for (i, path) in paths.iter().enumerate() {
        match identify_path(&fs, path, options) {
            Ok(ident) if json => log::info!("{}", serde_json::to_string(&ident)?),
            Ok(ident) => {
                if i > 0 {
                    crate::log_blank();
                }
                print_identification(&ident);
            }
            Err(err) => {
                failed += 1;
                log::warn!("{}: {err}", path.display());
            }
        }
    }

    if failed > 0 {
        return Err(CliError::other(format!(
            "{failed} of {} input(s) could not be identified",
            paths.len()
        )));
    }
    Ok(())
}

fn print_identification(ident: &Identification) {
    log::info!(
        "{}",
        ident.path.display().if_supports_color(Stdout, |t| t.bold()),
    );

    if let Some(track) = &ident.track {
        log::info!(
            "  Track:    {} (offset {}, {})",
            track.path.display(),
            track.offset,
            format_bytes_approx(track.size),
        );
    }

    match ident.system {
        Some(system) => log::info!(
            "  System:   {}",
            system.display_name().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "  System:   {}",
            "unknown".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }

    if let Some(decoder) = ident.decoder {
        log::info!("  Decoder:  {decoder}");
    }

    match &ident.serial {
        Some(serial) if serial.is_exact() => log::info!(
            "  Serial:   {}",
            serial.if_supports_color(Stdout, |t| t.green()),
        ),
        Some(serial) => log::info!(
            "  Serial:   {} {}",
            serial.if_supports_color(Stdout, |t| t.yellow()),
            "(approximate)".if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  Serial:   {}",
            "not found".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}
