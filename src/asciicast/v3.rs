//! Newline-delimited asciicast formats (v2 and v3).
//!
//! The first line is a JSON header, every following line an event array
//! `[time, code, data]`. v3 stores `time` as the interval since the previous
//! event and the size under `term`; v2 stores absolute times and a top-level
//! `width`/`height`.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use super::{checked_size, Frame, Recording, RecordingError, Version};

#[derive(Deserialize)]
struct StreamHeader {
    width: Option<u64>,
    height: Option<u64>,
    term: Option<TermInfo>,
    duration: Option<f64>,
    title: Option<String>,
}

#[derive(Deserialize)]
struct TermInfo {
    cols: Option<u64>,
    rows: Option<u64>,
}

impl StreamHeader {
    fn size(&self) -> Option<(u64, u64)> {
        if let Some(TermInfo {
            cols: Some(cols),
            rows: Some(rows),
        }) = self.term
        {
            return Some((cols, rows));
        }
        Some((self.width?, self.height?))
    }
}

/// A parsed event line.
struct Event<'a> {
    time: f64,
    code: String,
    data: &'a serde_json::Value,
}

impl<'a> Event<'a> {
    fn from_value(value: &'a serde_json::Value) -> Result<Self> {
        let arr = value.as_array().context("Event must be a JSON array")?;
        if arr.len() < 3 {
            bail!("Event array must have at least 3 elements");
        }
        let time = arr[0].as_f64().context("Event time must be a number")?;
        let code = arr[1]
            .as_str()
            .context("Event type must be a string")?
            .to_string();
        Ok(Event {
            time,
            code,
            data: &arr[2],
        })
    }
}

pub(super) fn parse(content: &str, version: Version) -> Result<Recording> {
    let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (_, header_line) = lines.next().context("File is empty")?;
    let header: StreamHeader =
        serde_json::from_str(header_line).context("Failed to parse header")?;
    let (width, height) = header.size().ok_or(RecordingError::MissingSize)?;
    let (width, height) = checked_size(width, height)?;

    let mut frames = Vec::new();
    let mut pending = 0.0;
    let mut elapsed = 0.0;
    for (index, line) in lines {
        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("Failed to parse event on line {}", index + 1))?;
        let event = Event::from_value(&value)
            .with_context(|| format!("Failed to parse event on line {}", index + 1))?;

        let interval = match version {
            Version::Two => (event.time - elapsed).max(0.0),
            _ => event.time,
        };
        elapsed += interval;
        pending += interval;

        if event.code == "o" {
            let data = event
                .data
                .as_str()
                .with_context(|| format!("Output data on line {} must be a string", index + 1))?;
            frames.push(Frame::new(pending, data));
            pending = 0.0;
        }
    }

    Ok(Recording {
        version,
        width,
        height,
        duration: header.duration,
        title: header.title,
        frames,
    })
}
