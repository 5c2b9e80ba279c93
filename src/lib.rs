//! castshot - export the screen of an asciicast recording at any point in time
//!
//! A recording's output is replayed through a small VT100-subset emulator
//! ([`terminal`]) and the resulting grid is written out by a pluggable
//! backend ([`render`]): LaTeX markup for typesetting or plain text with ANSI
//! colors.
//!
//! # Modules
//!
//! - [`asciicast`] - Recording loader (v1, v2, v3)
//! - [`terminal`] - Tokenizer, escape interpreter and screen buffer
//! - [`render`] - Renderer trait and backends
//! - [`player`] - Replay up to a timestamp and export
//! - [`config`] - Config file
//! - [`cli`] - Command line definition

pub mod asciicast;
pub mod cli;
pub mod config;
pub mod player;
pub mod render;
pub mod terminal;

pub use asciicast::Recording;
pub use config::{Config, Format};
pub use player::{export, ExportOptions, Player, ReplayOutcome};
pub use render::{render, AnsiRenderer, LatexRenderer, Renderer};
pub use terminal::{Cell, Color, ScreenBuffer, Verbosity};
