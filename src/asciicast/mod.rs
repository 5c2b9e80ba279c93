//! asciicast recording loader
//!
//! Reference: https://docs.asciinema.org/manual/asciicast/v1/ (and v2, v3)
//!
//! Reads a recording into a [`Recording`]: the terminal size plus the output
//! chunks in order, each with the delay since the previous chunk. Input,
//! marker and resize events are not replayed; their time is folded into the
//! next output frame.

mod v1;
mod v3;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// asciicast format version
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    One,
    Two,
    Three,
}

impl Version {
    fn from_number(number: u64) -> Option<Self> {
        match number {
            1 => Some(Version::One),
            2 => Some(Version::Two),
            3 => Some(Version::Three),
            _ => None,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Version::One => write!(f, "1"),
            Version::Two => write!(f, "2"),
            Version::Three => write!(f, "3"),
        }
    }
}

/// Problems with a recording that parsed as JSON but cannot be replayed.
#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    #[error("Unsupported asciicast version {0} (expected 1, 2 or 3)")]
    UnsupportedVersion(u64),

    #[error("Header has no version field")]
    MissingVersion,

    #[error("Header has no terminal size")]
    MissingSize,

    #[error("Invalid terminal size {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },
}

/// One chunk of terminal output.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Seconds since the previous frame
    pub delay: f64,
    pub data: String,
}

impl Frame {
    pub fn new(delay: f64, data: impl Into<String>) -> Self {
        Self {
            delay,
            data: data.into(),
        }
    }
}

/// A recording reduced to what replay needs.
#[derive(Debug, Clone)]
pub struct Recording {
    pub version: Version,
    pub width: usize,
    pub height: usize,
    /// Total length in seconds, when the header states one
    pub duration: Option<f64>,
    pub title: Option<String>,
    pub frames: Vec<Frame>,
}

impl Recording {
    /// Parse an asciicast file from a path
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {:?}", path))?;
        Self::parse_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Parse from a string, detecting the format version from the header
    pub fn parse_str(content: &str) -> Result<Self> {
        let header: Value = serde_json::Deserializer::from_str(content)
            .into_iter::<Value>()
            .next()
            .context("File is empty")?
            .context("Failed to parse header")?;

        let number = header
            .get("version")
            .and_then(Value::as_u64)
            .ok_or(RecordingError::MissingVersion)?;
        let version = Version::from_number(number).ok_or(RecordingError::UnsupportedVersion(number))?;

        match version {
            Version::One => v1::parse(header),
            Version::Two | Version::Three => v3::parse(content, version),
        }
    }
}

/// Reject zero-sized terminals and convert to `usize`.
fn checked_size(width: u64, height: u64) -> Result<(usize, usize), RecordingError> {
    let invalid = RecordingError::InvalidDimensions { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(invalid),
    }
}
