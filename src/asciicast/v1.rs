//! asciicast v1: a single JSON object with all output in `stdout`.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use super::{checked_size, Frame, Recording, Version};

#[derive(Deserialize)]
struct V1File {
    width: u64,
    height: u64,
    duration: Option<f64>,
    title: Option<String>,
    stdout: Vec<(f64, String)>,
}

pub(super) fn parse(document: Value) -> Result<Recording> {
    let file: V1File = serde_json::from_value(document).context("Invalid v1 recording")?;
    let (width, height) = checked_size(file.width, file.height)?;

    let frames: Vec<Frame> = file
        .stdout
        .into_iter()
        .map(|(delay, data)| Frame::new(delay, data))
        .collect();
    Ok(Recording {
        version: Version::One,
        width,
        height,
        duration: file.duration,
        title: file.title,
        frames,
    })
}
