//! LaTeX backend.
//!
//! Produces markup meant to be placed inside a verbatim-like environment that
//! still interprets commands (for example `alltt`). Colors use `\ansicolor`
//! for palette entries, which the including document is expected to define,
//! and xcolor's `\color[RGB]` for truecolor.

use std::io::{self, Write};

use super::Renderer;

/// Characters that would otherwise be interpreted by LaTeX, with their
/// replacements.
pub const LATEX_ESCAPES: &[(char, &str)] = &[('$', "\\$"), ('[', "{[}"), (']', "{]}")];

/// Writes a snapshot as LaTeX markup, one `\\`-terminated line per row.
pub struct LatexRenderer<W: Write> {
    out: W,
    escapes: Vec<(char, String)>,
}

impl<W: Write> LatexRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            escapes: LATEX_ESCAPES
                .iter()
                .map(|(c, s)| (*c, (*s).to_string()))
                .collect(),
        }
    }

    /// Add or replace the escape for `c`.
    pub fn with_escape(mut self, c: char, replacement: impl Into<String>) -> Self {
        let replacement = replacement.into();
        match self.escapes.iter_mut().find(|(existing, _)| *existing == c) {
            Some(entry) => entry.1 = replacement,
            None => self.escapes.push((c, replacement)),
        }
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for LatexRenderer<W> {
    fn set_indexed_color(&mut self, index: u8) -> io::Result<()> {
        write!(self.out, "\\ansicolor{{{}}}", index)
    }

    fn set_rgb_color(&mut self, r: u8, g: u8, b: u8) -> io::Result<()> {
        write!(self.out, "\\color[RGB]{{{}, {}, {}}}", r, g, b)
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.out.write_all(b"\\normalcolor{}")
    }

    fn write_char(&mut self, c: char) -> io::Result<()> {
        match self.escapes.iter().find(|(special, _)| *special == c) {
            Some((_, replacement)) => self.out.write_all(replacement.as_bytes()),
            None => {
                let mut utf8 = [0u8; 4];
                self.out.write_all(c.encode_utf8(&mut utf8).as_bytes())
            }
        }
    }

    fn write_newline(&mut self) -> io::Result<()> {
        self.out.write_all(b"\\\\\n")
    }
}
