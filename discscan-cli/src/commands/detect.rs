use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use discscan_lib::{Decoder, LocalFs, Vfs, detect_system};

use crate::CliError;

/// Print the console family of `image`, if a signature matches.
pub(crate) fn run_detect(image: &Path) -> Result<(), CliError> {
    let mut stream = LocalFs.open(image)?;
    match detect_system(stream.as_mut())? {
        Some(system) => log::info!(
            "{} ({})",
            system.short_name().if_supports_color(Stdout, |t| t.bold()),
            system.display_name().if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::warn!("{}: no known signature", image.display()),
    }
    Ok(())
}

/// Run `decoder` over `image` regardless of its signature.
pub(crate) fn run_serial(image: &Path, decoder: Decoder) -> Result<(), CliError> {
    let mut stream = LocalFs.open(image)?;
    let serial = discscan_lib::decoder::extract_serial(stream.as_mut(), decoder)?;
    if serial.is_exact() {
        log::info!("{serial}");
    } else {
        log::info!(
            "{serial} {}",
            "(approximate)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
