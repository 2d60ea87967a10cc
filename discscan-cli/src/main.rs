//! discscan CLI
//!
//! Command-line interface for identifying optical-disc game images.

mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::Level;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use discscan_lib::{Decoder, ScanOptions};

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "discscan")]
#[command(about = "Identify optical-disc game images by console and serial", long_about = None)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file to use instead of ~/.config/discscan/settings.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify images or CUE/GDI playlists
    Identify {
        /// Images or playlists to identify
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print one JSON object per input instead of text
        #[arg(long)]
        json: bool,

        /// Use the largest data track of a playlist instead of the first
        #[arg(long)]
        largest: bool,

        /// Do not search for an ASCII serial when no signature matches
        #[arg(long)]
        no_ascii_fallback: bool,
    },

    /// Show the data track a CUE or GDI playlist would be scanned from
    Track {
        playlist: PathBuf,

        /// Use the largest data track instead of the first
        #[arg(long)]
        largest: bool,
    },

    /// List every track file referenced by a playlist
    Files { playlist: PathBuf },

    /// Detect the console family of an image by its magic number
    Detect { image: PathBuf },

    /// Run one serial decoder over an image
    Serial {
        image: PathBuf,

        /// Decoder name (ps1, psp, gc, scd, sat, dc, ascii or a console alias)
        #[arg(short, long)]
        decoder: Decoder,
    },

    /// List the known console signatures
    Systems,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config;
    match cli.command {
        Commands::Identify {
            paths,
            json,
            largest,
            no_ascii_fallback,
        } => {
            let options = scan_options(config.as_deref(), largest, no_ascii_fallback)?;
            commands::identify::run_identify(&paths, &options, json)
        }
        Commands::Track { playlist, largest } => {
            let options = scan_options(config.as_deref(), largest, false)?;
            commands::playlist::run_track(&playlist, &options)
        }
        Commands::Files { playlist } => commands::playlist::run_files(&playlist),
        Commands::Detect { image } => commands::detect::run_detect(&image),
        Commands::Serial { image, decoder } => commands::detect::run_serial(&image, decoder),
        Commands::Systems => {
            commands::list::run_systems();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(config.as_deref()),
            ConfigAction::Path => {
                commands::config::run_config_path(config.as_deref());
                Ok(())
            }
        },
    }
}

/// Settings from disk, overridden by command-line flags.
fn scan_options(
    config: Option<&std::path::Path>,
    largest: bool,
    no_ascii_fallback: bool,
) -> Result<ScanOptions, CliError> {
    let settings = discscan_lib::settings::load_settings(config)?;
    let mut options = ScanOptions::from(&settings.scan);
    if largest {
        options.first_track = false;
    }
    if no_ascii_fallback {
        options.ascii_fallback = false;
    }
    Ok(options)
}

/// Route `log` output to stdout. Info lines are printed bare since they are
/// the command's normal output; other levels carry a prefix.
fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(
                buf,
                "{} {}",
                format!("[{level} {}]", record.target()).if_supports_color(Stdout, |t| t.dimmed()),
                record.args()
            ),
        })
        .init();
}

/// Emit an empty info line (section separator).
pub(crate) fn log_blank() {
    log::info!("");
}
