use serde::{Deserialize, Serialize};

/// Console families that can be fingerprinted from a disc image.
///
/// This enum centralizes console identity (short names, display names,
/// manufacturer and aliases) so the magic-number table, the decoder
/// registry and the CLI all agree on naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum System {
    #[serde(rename = "psp")]
    Psp,
    #[serde(rename = "ps1")]
    Ps1,
    #[serde(rename = "gc")]
    GameCube,
    #[serde(rename = "scd")]
    SegaCd,
    #[serde(rename = "sat")]
    Saturn,
    #[serde(rename = "dc")]
    Dreamcast,
}

/// All system variants in registration order.
const ALL_SYSTEMS: &[System] = &[
    System::Psp,
    System::Ps1,
    System::GameCube,
    System::SegaCd,
    System::Saturn,
    System::Dreamcast,
];

impl System {
    /// Canonical short name, as stored in the database layer.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Psp => "psp",
            Self::Ps1 => "ps1",
            Self::GameCube => "gc",
            Self::SegaCd => "scd",
            Self::Saturn => "sat",
            Self::Dreamcast => "dc",
        }
    }

    /// Full display name for the system.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Psp => "Sony PlayStation Portable",
            Self::Ps1 => "Sony PlayStation",
            Self::GameCube => "Nintendo GameCube",
            Self::SegaCd => "Sega CD / Mega CD",
            Self::Saturn => "Sega Saturn",
            Self::Dreamcast => "Sega Dreamcast",
        }
    }

    /// Console manufacturer.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::Psp | Self::Ps1 => "Sony",
            Self::GameCube => "Nintendo",
            Self::SegaCd | Self::Saturn | Self::Dreamcast => "Sega",
        }
    }

    /// All accepted names for this system (case-insensitive matching).
    ///
    /// The canonical short name always comes first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Psp => &["psp", "playstation portable"],
            Self::Ps1 => &["ps1", "psx", "playstation", "playstation1"],
            Self::GameCube => &["gc", "gamecube", "gcn", "ngc"],
            Self::SegaCd => &["scd", "segacd", "sega cd", "megacd", "mega cd"],
            Self::Saturn => &["sat", "saturn", "sega saturn"],
            Self::Dreamcast => &["dc", "dreamcast"],
        }
    }

    /// All system variants.
    pub fn all() -> &'static [System] {
        ALL_SYSTEMS
    }
}

impl std::fmt::Display for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `System`.
#[derive(Debug, Clone)]
pub struct SystemParseError(pub String);

impl std::fmt::Display for SystemParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown system: '{}'", self.0)
    }
}

impl std::error::Error for SystemParseError {}

impl std::str::FromStr for System {
    type Err = SystemParseError;

    /// Parse a system from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ALL_SYSTEMS
            .iter()
            .copied()
            .find(|system| system.aliases().contains(&lower.as_str()))
            .ok_or_else(|| SystemParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
