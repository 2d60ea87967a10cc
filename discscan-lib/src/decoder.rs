//! Serial decoder registry.
//!
//! Every console family has exactly one decoder; the generic ASCII search
//! is an extra decoder with no family of its own. The registry is a static
//! table so the CLI can list and select decoders by name.

use serde::{Deserialize, Serialize};

use discscan_core::{ReadSeek, ScanError, Serial, System};

/// A serial decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoder {
    Ps1,
    Psp,
    #[serde(rename = "gc")]
    GameCube,
    #[serde(rename = "scd")]
    SegaCd,
    #[serde(rename = "sat")]
    Saturn,
    #[serde(rename = "dc")]
    Dreamcast,
    Ascii,
}

type ExtractFn = fn(&mut dyn ReadSeek) -> Result<Serial, ScanError>;

/// Decoder → extraction function, in listing order.
static DECODERS: &[(Decoder, ExtractFn)] = &[
    (Decoder::Ps1, discscan_sony::ps1::extract_serial),
    (Decoder::Psp, discscan_sony::psp::extract_serial),
    (Decoder::GameCube, discscan_nintendo::gamecube::extract_serial),
    (Decoder::SegaCd, discscan_sega::sega_cd::extract_serial),
    (Decoder::Saturn, discscan_sega::saturn::extract_serial),
    (Decoder::Dreamcast, discscan_sega::dreamcast::extract_serial),
    (Decoder::Ascii, crate::ascii::extract_serial),
];

impl Decoder {
    /// The decoder for a console family.
    pub fn for_system(system: System) -> Self {
        match system {
            System::Ps1 => Self::Ps1,
            System::Psp => Self::Psp,
            System::GameCube => Self::GameCube,
            System::SegaCd => Self::SegaCd,
            System::Saturn => Self::Saturn,
            System::Dreamcast => Self::Dreamcast,
        }
    }

    /// The console family this decoder belongs to (`None` for ASCII).
    pub fn system(&self) -> Option<System> {
        match self {
            Self::Ps1 => Some(System::Ps1),
            Self::Psp => Some(System::Psp),
            Self::GameCube => Some(System::GameCube),
            Self::SegaCd => Some(System::SegaCd),
            Self::Saturn => Some(System::Saturn),
            Self::Dreamcast => Some(System::Dreamcast),
            Self::Ascii => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.system() {
            Some(system) => system.short_name(),
            None => "ascii",
        }
    }

    /// All decoders, in listing order.
    pub fn all() -> impl Iterator<Item = Decoder> {
        DECODERS.iter().map(|(decoder, _)| *decoder)
    }
}

impl std::fmt::Display for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no decoder.
#[derive(Debug, Clone)]
pub struct DecoderParseError(pub String);

impl std::fmt::Display for DecoderParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown decoder: '{}'", self.0)
    }
}

impl std::error::Error for DecoderParseError {}

impl std::str::FromStr for Decoder {
    type Err = DecoderParseError;

    /// Accepts `ascii`/`generic` or any name of a console family.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ascii") || s.eq_ignore_ascii_case("generic") {
            return Ok(Self::Ascii);
        }
        s.parse::<System>()
            .map(Self::for_system)
            .map_err(|_| DecoderParseError(s.to_string()))
    }
}

/// Run `decoder` over `stream`.
pub fn extract_serial(stream: &mut dyn ReadSeek, decoder: Decoder) -> Result<Serial, ScanError> {
    let extract = DECODERS
        .iter()
        .find(|(d, _)| *d == decoder)
        .map(|(_, extract)| *extract)
        .ok_or_else(|| ScanError::unsupported(format!("no decoder registered for {decoder}")))?;
    log::debug!("Running {decoder} decoder");
    extract(stream)
}

#[cfg(test)]
#[path = "tests/decoder_tests.rs"]
mod tests;
