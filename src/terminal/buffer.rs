//! Fixed-size screen buffer.
//!
//! Owns the character grid, the cursor and the current color. Output chunks
//! are fed in with [`ScreenBuffer::write`]; the grid is read back row by row
//! for rendering.

use std::collections::VecDeque;

use tracing::debug;

use super::handlers;
use super::tokenizer::{Token, Tokenizer};
use super::types::{Cell, Color, Verbosity};

/// A `width` x `height` grid of cells with a cursor.
///
/// The cursor always stays inside the grid. Moving past the right edge wraps
/// to the next line and moving past the bottom scrolls the grid up.
#[derive(Debug, Clone)]
pub struct ScreenBuffer {
    width: usize,
    height: usize,
    cursor_x: usize,
    cursor_y: usize,
    color: Color,
    /// Rows in display order, front is the top of the screen
    rows: VecDeque<Vec<Cell>>,
    verbosity: Verbosity,
}

impl ScreenBuffer {
    /// Create a blank buffer. Zero dimensions are raised to one.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_verbosity(width, height, Verbosity::Quiet)
    }

    pub fn with_verbosity(width: usize, height: usize, verbosity: Verbosity) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cursor_x: 0,
            cursor_y: 0,
            color: Color::Default,
            rows: (0..height).map(|_| blank_row(width)).collect(),
            verbosity,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cursor position as `(x, y)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_x, self.cursor_y)
    }

    /// Color applied to newly written characters.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Cell at column `x` of row `y`, if inside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y)?.get(x)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Characters of row `y` as a string (trailing blanks kept).
    pub fn row_text(&self, y: usize) -> Option<String> {
        self.rows
            .get(y)
            .map(|row| row.iter().map(|cell| cell.char).collect())
    }

    /// Replay one chunk of terminal output.
    pub fn write(&mut self, chunk: &str) {
        for token in Tokenizer::new(chunk) {
            match token {
                Token::Osc | Token::Escape(_) => {}
                Token::Csi { params, action } => handlers::dispatch_csi(self, params, action),
                Token::Text(text) => self.write_text(text),
                Token::Backspace => self.backspace(),
                Token::CarriageReturn => self.carriage_return(),
                Token::LineFeed => self.line_feed(),
                Token::Unknown(c) => {
                    if self.verbosity.is_verbose() {
                        debug!(char = ?c, "Unmatched character in input stream");
                    }
                }
            }
        }
    }

    /// Write each character at the cursor with the current color, advancing
    /// one column per character.
    pub fn write_text(&mut self, text: &str) {
        for c in text.chars() {
            self.put(c);
            self.move_cursor(1, 0);
        }
    }

    /// Move the cursor relative to its position.
    ///
    /// Running off the right edge wraps to column 0 of the next row, running
    /// off the left edge clamps to column 0. Every row past the bottom scrolls
    /// the grid up by one.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let mut dy = dy;
        let mut x = self.cursor_x as isize + dx;
        if x >= self.width as isize {
            x = 0;
            dy += 1;
        }
        self.cursor_x = x.max(0) as usize;

        let mut y = (self.cursor_y as isize + dy).max(0) as usize;
        while y >= self.height {
            self.scroll_up();
            y -= 1;
        }
        self.cursor_y = y;
    }

    pub fn carriage_return(&mut self) {
        self.move_cursor(-(self.cursor_x as isize), 0);
    }

    /// Line feed also returns to column 0.
    pub fn line_feed(&mut self) {
        self.move_cursor(-(self.cursor_x as isize), 1);
    }

    /// Step back one column and blank that cell with the current color.
    pub fn backspace(&mut self) {
        self.move_cursor(-1, 0);
        self.put(' ');
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Blank columns `start..end` of row `y` with the current color.
    pub(crate) fn blank_span(&mut self, y: usize, start: usize, end: usize) {
        let color = self.color;
        if let Some(row) = self.rows.get_mut(y) {
            let end = end.min(row.len());
            for cell in row.iter_mut().take(end).skip(start) {
                *cell = Cell::new(' ', color);
            }
        }
    }

    /// Blank every cell of rows `start..end`.
    pub(crate) fn blank_rows(&mut self, start: usize, end: usize) {
        for y in start..end.min(self.height) {
            self.blank_span(y, 0, self.width);
        }
    }

    fn put(&mut self, c: char) {
        let cell = Cell::new(c, self.color);
        self.rows[self.cursor_y][self.cursor_x] = cell;
    }

    fn scroll_up(&mut self) {
        self.rows.pop_front();
        self.rows.push_back(blank_row(self.width));
    }
}

fn blank_row(width: usize) -> Vec<Cell> {
    vec![Cell::default(); width]
}
