//! Command line definition.
//!
//! Kept in the library so the flag-to-option mapping can be tested without
//! spawning the binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Config, Format};
use crate::player::ExportOptions;
use crate::terminal::Verbosity;

/// Export the screen contents of an asciicast recording at a point in time
#[derive(Parser, Debug)]
#[command(name = "castshot", version, about)]
pub struct Cli {
    /// An existing asciicast (v1, v2 or v3)
    pub asciicast: PathBuf,

    /// The number of lines to output (default: screen height)
    #[arg(short = 'n', long)]
    pub height: Option<usize>,

    /// The position in seconds to export the screen contents at (default: end)
    #[arg(short, long)]
    pub timestamp: Option<f64>,

    /// Verbose output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read settings from this file instead of the default config location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn is_verbose(&self, config: &Config) -> bool {
        self.verbose > 0 || config.export.verbose
    }

    pub fn format(&self, config: &Config) -> Format {
        self.format.unwrap_or(config.export.format)
    }

    pub fn export_options(&self, config: &Config) -> ExportOptions {
        ExportOptions {
            timestamp: self.timestamp,
            rows: self.height.or(config.export.height),
            verbosity: Verbosity::from_flag(self.is_verbose(config)),
        }
    }
}
