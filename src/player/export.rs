//! One-shot export of a recording snapshot.

use std::io;

use tracing::info;

use super::{Player, ReplayOutcome};
use crate::asciicast::Recording;
use crate::render::{render_rows, Renderer};
use crate::terminal::Verbosity;

/// Settings for a single export.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Point in the recording to capture. When `None` the header duration is
    /// used, and without one every frame is replayed.
    pub timestamp: Option<f64>,
    /// Rows to emit from the top; the full screen when `None`
    pub rows: Option<usize>,
    pub verbosity: Verbosity,
}

/// Replay `recording` up to the requested time and render the screen.
pub fn export(
    recording: &Recording,
    options: &ExportOptions,
    renderer: &mut dyn Renderer,
) -> io::Result<ReplayOutcome> {
    let target = options
        .timestamp
        .or(recording.duration)
        .unwrap_or(f64::INFINITY);

    let mut player = Player::new(recording.width, recording.height, options.verbosity);
    let outcome = player.replay_until(&recording.frames, target);

    let buffer = player.buffer();
    let rows = options
        .rows
        .map_or(buffer.height(), |rows| rows.min(buffer.height()));
    render_rows(buffer, renderer, rows)?;

    if options.verbosity.is_verbose() {
        info!(
            time = outcome.time,
            frames = outcome.frames_applied,
            "Exported screen contents at time: {}",
            outcome.time
        );
    }

    Ok(outcome)
}
