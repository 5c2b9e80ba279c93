//! Erase handlers.
//!
//! Handles CSI sequences:
//! - J: Erase in display
//! - K: Erase in line
//!
//! Erased cells become spaces in the current color.

use crate::terminal::buffer::ScreenBuffer;

/// Which part of the screen an erase applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseTarget {
    /// `J`: the current line plus rows above or below it
    Screen,
    /// `K`: the current line only
    Line,
}

impl EraseTarget {
    pub fn from_action(action: char) -> Option<Self> {
        match action {
            'J' => Some(EraseTarget::Screen),
            'K' => Some(EraseTarget::Line),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    /// From the cursor to the end (`""` or `"0"`)
    ToEnd,
    /// From the start through the cursor (`"1"`)
    ToStart,
    /// Everything (`"2"`)
    All,
}

impl EraseMode {
    /// Parse the raw CSI parameter string. Anything else is not an erase mode.
    pub fn parse(params: &str) -> Option<Self> {
        match params {
            "" | "0" => Some(EraseMode::ToEnd),
            "1" => Some(EraseMode::ToStart),
            "2" => Some(EraseMode::All),
            _ => None,
        }
    }
}

impl ScreenBuffer {
    /// Erase part of the line or screen relative to the cursor.
    ///
    /// `ToStart` on the screen blanks rows `0..=cursor_y - 1` in full and the
    /// cursor row only up to and including the cursor column.
    pub fn erase(&mut self, target: EraseTarget, mode: EraseMode) {
        let (x, y) = self.cursor();
        let width = self.width();
        let height = self.height();

        let (line_span, rows) = match mode {
            EraseMode::ToEnd => ((x, width), (y + 1, height)),
            // Inclusive bounds: the cursor column and row y - 1 are erased,
            // not the half-open 0..x and 0..y-1 that would skip them.
            EraseMode::ToStart => ((0, x + 1), (0, y)),
            EraseMode::All => ((0, width), (0, height)),
        };

        self.blank_span(y, line_span.0, line_span.1);
        if target == EraseTarget::Screen {
            self.blank_rows(rows.0, rows.1);
        }
    }
}
