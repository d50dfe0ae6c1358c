//! Landmark frames and the sources that deliver them.
//!
//! A [`LandmarkFrame`] is one set of normalized face mesh points for a single
//! video frame. Coordinates are relative to the frame size, so `x` and `y`
//! live in `[0, 1]`. The frame is read-only to the engine and is not kept past
//! the call that processes it.
//!
//! A point whose `x` or `y` is not finite is treated as absent, which lets a
//! producer mark individual landmarks as lost without renumbering the rest.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single normalized face landmark
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0 = left edge, 1 = right edge
    pub x: f64,
    /// Vertical position, 0 = top edge, 1 = bottom edge
    pub y: f64,
    /// Relative depth, 0 when the producer does not supply one
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    /// Placeholder for a point the producer could not locate
    pub const MISSING: Self = Self {
        x: f64::NAN,
        y: f64::NAN,
        z: f64::NAN,
    };

    /// Create a landmark without depth
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// True if the point carries usable image coordinates
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Landmarks for one video frame, indexed by the face mesh topology
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkFrame {
    points: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Wrap a list of landmarks
    #[must_use]
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    /// Look up a landmark by topology index
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLandmark`] if the frame carries fewer points
    /// than `index + 1` or the point at `index` is marked missing.
    pub fn get(&self, index: usize) -> Result<&Landmark> {
        self.points
            .get(index)
            .filter(|point| point.is_present())
            .ok_or(Error::MissingLandmark {
                index,
                available: self.points.len(),
            })
    }

    /// Mutable access for producers that patch a frame in place
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Landmark> {
        self.points.get_mut(index)
    }

    /// Number of landmarks in the frame
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the producer delivered no landmarks at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All landmarks in topology order
    #[must_use]
    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

impl From<Vec<Landmark>> for LandmarkFrame {
    fn from(points: Vec<Landmark>) -> Self {
        Self::new(points)
    }
}

/// A landmark frame together with the monotonic time it was captured at
#[derive(Debug, Clone, PartialEq)]
pub struct TimedFrame {
    /// Capture time in milliseconds on a monotonic clock
    pub timestamp_ms: u64,
    /// Landmarks for that frame
    pub frame: LandmarkFrame,
}

impl TimedFrame {
    /// Pair a frame with its timestamp
    #[must_use]
    pub fn new(timestamp_ms: u64, frame: LandmarkFrame) -> Self {
        Self { timestamp_ms, frame }
    }
}

/// Pull-based supplier of landmark frames.
///
/// Implementations hand out one frame per call and are never asked for the
/// next frame before the previous one has been fully processed.
pub trait LandmarkSource {
    /// Fetch the next frame, `Ok(None)` once the source is exhausted
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying producer fails to deliver a frame.
    fn next_frame(&mut self) -> Result<Option<TimedFrame>>;
}

/// Adapts any iterator of timed frames into a [`LandmarkSource`]
pub struct IterSource<I> {
    frames: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = TimedFrame>,
{
    /// Wrap an iterator
    pub fn new<T>(frames: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl<I> LandmarkSource for IterSource<I>
where
    I: Iterator<Item = TimedFrame>,
{
    fn next_frame(&mut self) -> Result<Option<TimedFrame>> {
        Ok(self.frames.next())
    }
}
