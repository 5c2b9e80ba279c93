//! Plain terminal backend.
//!
//! Re-emits the snapshot as text with ANSI foreground color codes, so it can
//! be viewed with `cat` or `less -R`.

use std::io::{self, Write};

use super::Renderer;

/// Writes characters verbatim and colors as SGR escape codes.
pub struct AnsiRenderer<W: Write> {
    out: W,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn set_indexed_color(&mut self, index: u8) -> io::Result<()> {
        write!(self.out, "\x1b[38;5;{}m", index)
    }

    fn set_rgb_color(&mut self, r: u8, g: u8, b: u8) -> io::Result<()> {
        write!(self.out, "\x1b[38;2;{};{};{}m", r, g, b)
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x1b[0m")
    }

    fn write_char(&mut self, c: char) -> io::Result<()> {
        let mut utf8 = [0u8; 4];
        self.out.write_all(c.encode_utf8(&mut utf8).as_bytes())
    }

    fn write_newline(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }
}
