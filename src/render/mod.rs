//! Snapshot rendering.
//!
//! A [`Renderer`] is an output backend that knows how to switch colors and
//! write characters in its target format. [`render`] walks a
//! [`ScreenBuffer`] and drives a backend, switching color only where the
//! color actually changes.
//!
//! Backends:
//! - [`AnsiRenderer`]: plain terminal output with ANSI color codes
//! - [`LatexRenderer`]: LaTeX markup for typesetting

mod ansi;
mod latex;

use std::io;

use crate::terminal::{Color, ScreenBuffer};

pub use ansi::AnsiRenderer;
pub use latex::LatexRenderer;

/// Output backend for a rendered snapshot.
pub trait Renderer {
    /// Switch to a palette color (0-255).
    fn set_indexed_color(&mut self, index: u8) -> io::Result<()>;
    /// Switch to a 24-bit color.
    fn set_rgb_color(&mut self, r: u8, g: u8, b: u8) -> io::Result<()>;
    /// Return to the default color.
    fn reset_color(&mut self) -> io::Result<()>;
    fn write_char(&mut self, c: char) -> io::Result<()>;
    /// End the current row.
    fn write_newline(&mut self) -> io::Result<()>;
}

/// Render every row of `buffer`, top to bottom.
pub fn render(buffer: &ScreenBuffer, renderer: &mut dyn Renderer) -> io::Result<()> {
    render_rows(buffer, renderer, buffer.height())
}

/// Render the first `limit` rows of `buffer`.
///
/// The tracked color starts as [`Color::Default`] and carries across rows, so
/// a backend only sees a color call where two consecutive cells differ.
pub fn render_rows(
    buffer: &ScreenBuffer,
    renderer: &mut dyn Renderer,
    limit: usize,
) -> io::Result<()> {
    let mut current = Color::Default;
    for row in buffer.rows().take(limit) {
        for cell in row {
            if cell.color != current {
                current = cell.color;
                match current {
                    Color::Default => renderer.reset_color()?,
                    Color::Indexed(index) => renderer.set_indexed_color(index)?,
                    Color::Rgb(r, g, b) => renderer.set_rgb_color(r, g, b)?,
                }
            }
            renderer.write_char(cell.char)?;
        }
        renderer.write_newline()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call for inspection.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Recorder {
        fn color_calls(&self) -> usize {
            self.calls.iter().filter(|c| c.starts_with("color")).count()
        }
    }

    impl Renderer for Recorder {
        fn set_indexed_color(&mut self, index: u8) -> io::Result<()> {
            self.calls.push(format!("color {index}"));
            Ok(())
        }

        fn set_rgb_color(&mut self, r: u8, g: u8, b: u8) -> io::Result<()> {
            self.calls.push(format!("color {r},{g},{b}"));
            Ok(())
        }

        fn reset_color(&mut self) -> io::Result<()> {
            self.calls.push("color reset".to_string());
            Ok(())
        }

        fn write_char(&mut self, c: char) -> io::Result<()> {
            self.calls.push(c.to_string());
            Ok(())
        }

        fn write_newline(&mut self) -> io::Result<()> {
            self.calls.push("newline".to_string());
            Ok(())
        }
    }

    #[test]
    fn one_color_call_per_transition() {
        // Row colors: A A B B A
        let mut buf = ScreenBuffer::new(5, 2);
        buf.write("\x1b[31maa\x1b[38;2;1;2;3mbb\x1b[31ma");

        let mut rec = Recorder::default();
        render_rows(&buf, &mut rec, 1).unwrap();

        assert_eq!(rec.color_calls(), 3);
        assert_eq!(
            rec.calls,
            vec![
                "color 1", "a", "a", "color 1,2,3", "b", "b", "color 1", "a", "newline",
            ]
        );
    }

    #[test]
    fn default_colored_grid_emits_no_color_calls() {
        let mut buf = ScreenBuffer::new(3, 2);
        buf.write("hi");
        let mut rec = Recorder::default();
        render(&buf, &mut rec).unwrap();
        assert_eq!(rec.color_calls(), 0);
        assert_eq!(rec.calls.iter().filter(|c| *c == "newline").count(), 2);
    }

    #[test]
    fn color_carries_across_rows() {
        let mut buf = ScreenBuffer::new(2, 3);
        buf.write("\x1b[32mab\x1b[0mc");
        let mut rec = Recorder::default();
        render(&buf, &mut rec).unwrap();
        assert_eq!(
            rec.calls,
            vec![
                "color 2", "a", "b", "newline", "color reset", "c", " ", "newline", " ", " ",
                "newline",
            ]
        );
    }

    #[test]
    fn render_rows_stops_at_limit() {
        let mut buf = ScreenBuffer::new(2, 3);
        buf.write("abcdef");
        let mut rec = Recorder::default();
        render_rows(&buf, &mut rec, 1).unwrap();
        assert_eq!(rec.calls, vec!["c", "d", "newline"]);
    }
}
