//! OSK command line tool
//!
//! ```bash
//! # Load and validate a key set
//! osk check qwerty.json
//!
//! # Print the keys as they appear with caps lock on in an email field
//! osk resolve qwerty.json --caps --variation email
//!
//! # Re-encode a TOML key set as JSON
//! osk dump qwerty.toml
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use osk_config::{KeySetConfig, KeySetLoader, ResolveSettings};
use osk_types::key_type::KeyVariation;

#[derive(Parser, Debug)]
#[command(name = "osk")]
#[command(version)]
#[command(about = "Check, resolve and convert OSK key set documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and validate a key set
    Check {
        /// Key set file, `.json` or `.toml`
        file: PathBuf,
    },

    /// Print every key resolved for a caps state and text field variation
    Resolve {
        /// Key set file, `.json` or `.toml`
        file: PathBuf,

        /// Resolve with caps active
        #[arg(long)]
        caps: bool,

        /// Text field variation: all, email, normal, password or uri
        #[arg(long, value_parser = parse_variation)]
        variation: Option<KeyVariation>,

        /// Print the data sent to the editor instead of the key face text
        #[arg(long)]
        raw: bool,

        /// Resolve settings file (TOML), `OSK_*` environment variables override it
        #[arg(long, short)]
        settings: Option<PathBuf>,
    },

    /// Re-encode a key set as pretty JSON
    Dump {
        /// Key set file, `.json` or `.toml`
        file: PathBuf,
    },
}

fn parse_variation(s: &str) -> Result<KeyVariation, String> {
    KeyVariation::from_str(s)
        .map_err(|_| format!("unknown variation `{}`, expected one of all, email, normal, password, uri", s))
}

fn load(file: &Path) -> Result<KeySetConfig> {
    KeySetLoader::load(file).with_context(|| format!("Failed to load key set {}", file.display()))
}

/// Settings from file and environment, with command line flags on top
fn settings(path: Option<&Path>, caps: bool, variation: Option<KeyVariation>, raw: bool) -> Result<ResolveSettings> {
    let mut settings = ResolveSettings::load(path).context("Failed to load resolve settings")?;
    settings.caps |= caps;
    if let Some(variation) = variation {
        settings.variation = variation;
    }
    if raw {
        settings.display = false;
    }
    Ok(settings)
}

/// One line per row, keys separated by spaces
fn format_rows(key_set: &KeySetConfig, settings: &ResolveSettings) -> Vec<String> {
    key_set
        .render(settings.caps, settings.variation, settings.display)
        .into_iter()
        .map(|row| row.join(" "))
        .collect()
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check { file } => {
            let key_set = load(&file)?;
            println!(
                "{}: {} rows, {} keys, ok",
                key_set.name,
                key_set.rows.len(),
                key_set.key_count()
            );
        }
        Commands::Resolve {
            file,
            caps,
            variation,
            raw,
            settings: settings_file,
        } => {
            let settings = settings(settings_file.as_deref(), caps, variation, raw)?;
            let key_set = load(&file)?;
            info!(
                "Resolving `{}` with caps={} variation={} display={}",
                key_set.name, settings.caps, settings.variation, settings.display
            );
            for line in format_rows(&key_set, &settings) {
                println!("{}", line);
            }
        }
        Commands::Dump { file } => {
            let key_set = load(&file)?;
            println!("{}", serde_json::to_string_pretty(&key_set)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(Cli::parse())
}
