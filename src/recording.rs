//! Landmark recordings for offline replay.
//!
//! A recording is a JSON Lines file with one object per captured frame:
//!
//! ```text
//! {"timestamp_ms": 0, "landmarks": [[0.51, 0.32], [0.49, 0.33, -0.01], ...]}
//! ```
//!
//! Each landmark is `[x, y]`, `[x, y, z]` or `null` for a point the tracker
//! lost. A frame with an empty `landmarks` list stands for "no face in view".
//! Blank lines are skipped.

use crate::{
    landmarks::{Landmark, LandmarkFrame, LandmarkSource, TimedFrame},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

/// On-disk shape of one recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Capture time in milliseconds
    pub timestamp_ms: u64,
    /// Landmarks as `[x, y]` or `[x, y, z]` arrays, `null` when lost
    pub landmarks: Vec<Option<Vec<f64>>>,
}

impl RecordedFrame {
    /// Convert into a timed frame, checking every point's arity
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if a point has fewer than two or more
    /// than three coordinates.
    pub fn into_timed(self) -> Result<TimedFrame> {
        let mut points = Vec::with_capacity(self.landmarks.len());
        for (i, coords) in self.landmarks.iter().enumerate() {
            let point = match coords.as_deref() {
                None => Landmark::MISSING,
                Some([x, y]) => Landmark::new(*x, *y),
                Some([x, y, z]) => Landmark { x: *x, y: *y, z: *z },
                Some(other) => {
                    return Err(Error::InvalidInput(format!(
                        "Landmark {i} has {} coordinates, expected 2 or 3",
                        other.len()
                    )))
                }
            };
            points.push(point);
        }
        Ok(TimedFrame::new(self.timestamp_ms, LandmarkFrame::new(points)))
    }
}

impl From<&TimedFrame> for RecordedFrame {
    fn from(timed: &TimedFrame) -> Self {
        Self {
            timestamp_ms: timed.timestamp_ms,
            landmarks: timed
                .frame
                .points()
                .iter()
                .map(|p| p.is_present().then(|| vec![p.x, p.y, p.z]))
                .collect(),
        }
    }
}

/// Replays a JSON Lines recording as a [`LandmarkSource`]
pub struct RecordingSource<R> {
    reader: R,
    line_number: usize,
    buffer: String,
}

impl RecordingSource<BufReader<File>> {
    /// Open a recording file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Opening landmark recording: {}", path.display());
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordingSource<R> {
    /// Read a recording from any buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> LandmarkSource for RecordingSource<R> {
    fn next_frame(&mut self) -> Result<Option<TimedFrame>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }

            let recorded: RecordedFrame = serde_json::from_str(line).map_err(|e| Error::RecordingError {
                line: self.line_number,
                message: e.to_string(),
            })?;

            return recorded
                .into_timed()
                .map(Some)
                .map_err(|e| Error::RecordingError {
                    line: self.line_number,
                    message: e.to_string(),
                });
        }
    }
}

/// Write frames as a JSON Lines recording
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_recording<W: Write>(mut writer: W, frames: &[TimedFrame]) -> Result<()> {
    for timed in frames {
        let line = serde_json::to_string(&RecordedFrame::from(timed))?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
