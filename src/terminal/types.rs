//! Terminal data types.
//!
//! Contains the core data structures for representing terminal state:
//! - Color: foreground color of a cell (default, 256-color palette, RGB)
//! - Cell: A single character with its color
//! - Verbosity: whether the interpreter reports what it skips

/// Foreground color of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// No color set (terminal default)
    #[default]
    Default,
    /// Palette index (0-255)
    Indexed(u8),
    /// 24-bit truecolor
    Rgb(u8, u8, u8),
}

/// A single character cell in the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub color: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            color: Color::Default,
        }
    }
}

impl Cell {
    pub fn new(char: char, color: Color) -> Self {
        Self { char, color }
    }
}

/// Controls whether skipped input is reported through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }
}
