//! Terminal emulator tests.
//!
//! Organized by handler category:
//! - cursor_tests: Cursor movement, wrapping and scrolling
//! - editing_tests: Erase operations
//! - style_tests: SGR color parsing through the output stream
//! - integration_tests: Full sequence replay
//! - invariant_tests: Property tests for cursor bounds and grid size


use super::ScreenBuffer;

/// All rows of the buffer as strings.
pub(super) fn screen(buf: &ScreenBuffer) -> Vec<String> {
    (0..buf.height())
        .map(|y| buf.row_text(y).unwrap_or_default())
        .collect()
}
