//! Terminal escape sequence handlers.
//!
//! Organized by category:
//! - editing: Erase operations
//! - style: SGR (Select Graphic Rendition) handling
//!
//! Every other CSI sequence is skipped.

pub mod editing;
pub mod style;

use tracing::debug;

use super::buffer::ScreenBuffer;
use editing::{EraseMode, EraseTarget};

/// Apply one CSI sequence to the buffer.
pub(crate) fn dispatch_csi(buffer: &mut ScreenBuffer, params: &str, action: char) {
    let verbose = buffer.verbosity().is_verbose();

    if action == 'm' {
        let color = style::apply_sgr(buffer.color(), params, buffer.verbosity());
        buffer.set_color(color);
        return;
    }

    match EraseTarget::from_action(action) {
        Some(target) => match EraseMode::parse(params) {
            Some(mode) => buffer.erase(target, mode),
            None => {
                if verbose {
                    debug!(params, action = %action, "Unknown erase mode");
                }
            }
        },
        None => {
            if verbose {
                debug!(params, action = %action, "Unknown CSI sequence");
            }
        }
    }
}
