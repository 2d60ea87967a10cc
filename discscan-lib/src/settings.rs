//! Shared scan settings.
//!
//! The settings file lives at `~/.config/discscan/settings.toml`. Every key
//! is optional; a missing file or key falls back to the defaults.
//!
//! ```toml
//! [scan]
//! first_track = true
//! ascii_fallback = true
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// All persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
}

/// Defaults for track selection and serial extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Take the first data track of a playlist rather than the largest.
    pub first_track: bool,
    /// Fall back to the generic ASCII search when no signature matches.
    pub ascii_fallback: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            first_track: true,
            ascii_fallback: true,
        }
    }
}

/// Canonical path to the settings file: `~/.config/discscan/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("discscan").join("settings.toml")
}

/// Load settings from `path`, or from [`settings_path`] when `None`.
///
/// A missing file yields the defaults; a malformed one is an error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = path.map_or_else(settings_path, Path::to_path_buf);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(err) => return Err(err.into()),
    };
    toml::from_str(&contents).map_err(|source| SettingsError::Parse { path, source })
}

/// Render settings as pretty-printed TOML for display.
pub fn settings_string(settings: &Settings) -> Result<String, SettingsError> {
    Ok(toml::to_string_pretty(settings)?)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
