use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use discscan_lib::{Decoder, MAGIC_NUMBERS};

/// List every console family with its signature and decoder.
pub(crate) fn run_systems() {
    log::info!("Known signatures:");
    crate::log_blank();

    let mut current_manufacturer = "";

    for entry in MAGIC_NUMBERS {
        let system = entry.system;
        if system.manufacturer() != current_manufacturer {
            if !current_manufacturer.is_empty() {
                crate::log_blank();
            }
            current_manufacturer = system.manufacturer();
            log::info!(
                "{}:",
                current_manufacturer.if_supports_color(Stdout, |t| t.bold()),
            );
        }

        log::info!(
            "  {} [{}]",
            system.short_name().if_supports_color(Stdout, |t| t.bold()),
            system.display_name().if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!(
            "    Magic: {} at 0x{:04X}",
            magic_text(entry.magic),
            entry.offset
        );
        log::info!("    Decoder: {}", Decoder::for_system(system));
        log::info!("    Aliases: {}", system.aliases().join(", "));
    }

    crate::log_blank();
    log::info!(
        "Images matching no signature fall back to the {} decoder.",
        Decoder::Ascii.if_supports_color(Stdout, |t| t.bold()),
    );
}

/// Quote printable magic, hex-dump anything else.
fn magic_text(magic: &[u8]) -> String {
    if magic.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        format!("\"{}\"", String::from_utf8_lossy(magic))
    } else {
        magic
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
