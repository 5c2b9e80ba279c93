//! Virtual terminal emulator module.
//!
//! Replays raw asciicast output into a fixed-size screen buffer. Supports the
//! subset of ANSI sequences needed to reconstruct a colored snapshot: text,
//! backspace, CR/LF, foreground color (SGR) and erase (ED/EL). Everything else
//! is consumed and skipped.

mod buffer;
pub mod handlers;
mod tokenizer;
mod types;

#[cfg(test)]
mod tests;

pub use buffer::ScreenBuffer;
pub use handlers::editing::{EraseMode, EraseTarget};
pub use handlers::style::apply_sgr;
pub use tokenizer::{Token, Tokenizer};
pub use types::{Cell, Color, Verbosity};
