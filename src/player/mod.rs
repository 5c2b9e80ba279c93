//! Recording replay.
//!
//! The [`Player`] feeds output frames into a [`ScreenBuffer`] in order until
//! a target time is reached. [`export`] wraps the whole run: build a buffer
//! sized from the recording, replay, and render the result.
//!
//! # Usage
//!
//! ```no_run
//! use castshot::asciicast::Recording;
//! use castshot::player::{export, ExportOptions};
//! use castshot::render::AnsiRenderer;
//!
//! let recording = Recording::parse("session.cast").unwrap();
//! let mut renderer = AnsiRenderer::new(std::io::stdout());
//! let outcome = export(&recording, &ExportOptions::default(), &mut renderer).unwrap();
//! eprintln!("screen at {:.2}s", outcome.time);
//! ```

mod export;

use crate::asciicast::Frame;
use crate::terminal::{ScreenBuffer, Verbosity};

pub use export::{export, ExportOptions};

/// Where a replay stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayOutcome {
    /// Cumulative time reached, including the delay of the frame that
    /// stopped the replay
    pub time: f64,
    /// Number of frames written to the buffer
    pub frames_applied: usize,
}

/// Drives a screen buffer through a recording.
#[derive(Debug)]
pub struct Player {
    buffer: ScreenBuffer,
}

impl Player {
    pub fn new(width: usize, height: usize, verbosity: Verbosity) -> Self {
        Self {
            buffer: ScreenBuffer::with_verbosity(width, height, verbosity),
        }
    }

    /// Write frames in order until the cumulative time reaches `target`.
    ///
    /// A frame whose cumulative time is `>= target` is not written, so a frame
    /// landing exactly on the target is excluded.
    pub fn replay_until(&mut self, frames: &[Frame], target: f64) -> ReplayOutcome {
        let mut time = 0.0;
        let mut frames_applied = 0;
        for frame in frames {
            time += frame.delay;
            if time >= target {
                break;
            }
            self.buffer.write(&frame.data);
            frames_applied += 1;
        }
        ReplayOutcome {
            time,
            frames_applied,
        }
    }

    pub fn buffer(&self) -> &ScreenBuffer {
        &self.buffer
    }
}
