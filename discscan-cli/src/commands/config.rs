use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use discscan_lib::settings::{load_settings, settings_path, settings_string};

use crate::CliError;

/// Show the effective settings and where they came from.
pub(crate) fn run_config_show(config: Option<&Path>) -> Result<(), CliError> {
    let path = config.map_or_else(settings_path, Path::to_path_buf);

    log::info!(
        "{}",
        "discscan Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let settings = load_settings(Some(path.as_path()))?;
    for line in settings_string(&settings)?.lines() {
        log::info!("  {line}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(config: Option<&Path>) {
    let path = config.map_or_else(settings_path, Path::to_path_buf);
    log::info!("{}", path.display());
}
