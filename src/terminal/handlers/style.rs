//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequence for text styling. Only the foreground color is
//! tracked:
//! - Reset (0, 39)
//! - Standard foreground colors (30-37)
//! - Bright foreground colors (90-97), mapped to palette entries 8-15
//! - Extended colors - 256-color mode (38;5;n)
//! - Extended colors - RGB mode (38;2;r;g;b)
//!
//! Text attributes and background colors are accepted and ignored. Their
//! extended forms (48;5;n, 48;2;r;g;b) still consume their arguments so those
//! are never mistaken for codes of their own.

use tracing::debug;

use crate::terminal::types::{Color, Verbosity};

/// Apply an SGR parameter string to `color` and return the resulting color.
pub fn apply_sgr(mut color: Color, params: &str, verbosity: Verbosity) -> Color {
    if params.is_empty() || params == "0" {
        return Color::Default;
    }

    let codes = parse_codes(params);
    let mut i = 0;
    while i < codes.len() {
        let code = codes[i];
        match code {
            0 | 39 => color = Color::Default,
            30..=37 => color = Color::Indexed((code - 30) as u8),
            90..=97 => color = Color::Indexed((code - 90 + 8) as u8),
            38 => match extended_color(&codes[i + 1..]) {
                Some((extended, consumed)) => {
                    color = extended;
                    i += consumed;
                }
                None => {
                    if verbosity.is_verbose() {
                        debug!(params, "Invalid color sequence");
                    }
                }
            },
            48 => {
                // Background colors are not tracked, only skip the arguments
                if let Some((_, consumed)) = extended_color(&codes[i + 1..]) {
                    i += consumed;
                }
            }
            1..=9 | 21..=29 | 40..=47 | 49 | 100..=107 => {}
            _ => {
                if verbosity.is_verbose() {
                    debug!(code, "Unknown SGR");
                }
            }
        }
        i += 1;
    }

    color
}

/// Extract every run of digits from the parameter string.
///
/// Separators other than `;` (such as `:` or a private marker) are skipped the
/// same way. Runs too large for a `u32` become `u32::MAX`, which no code uses.
fn parse_codes(params: &str) -> Vec<u32> {
    params
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse().unwrap_or(u32::MAX))
        .collect()
}

/// Decode the arguments that follow a 38/48 code.
///
/// Returns the color and how many arguments it consumed.
fn extended_color(args: &[u32]) -> Option<(Color, usize)> {
    match args {
        [5, index, ..] => Some((Color::Indexed(channel(*index)), 2)),
        [_, r, g, b, ..] => Some((Color::Rgb(channel(*r), channel(*g), channel(*b)), 4)),
        _ => None,
    }
}

fn channel(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
