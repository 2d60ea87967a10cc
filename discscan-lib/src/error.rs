use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or rendering settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error while reading the settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML for [`Settings`](crate::Settings)
    #[error("Invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Settings could not be rendered as TOML
    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
