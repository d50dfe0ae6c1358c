//! Tracking session: pulls frames from a [`LandmarkSource`] one at a time and
//! feeds them through a [`GestureEngine`].

use crate::{
    engine::{Clock, GestureCounts, GestureEngine, MonotonicClock},
    landmarks::LandmarkSource,
    Result,
};
use log::{debug, info};

/// Totals reported when a session finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Frames handed to the engine, including empty ones
    pub frames_processed: u64,
    /// Frames that carried no landmarks
    pub empty_frames: u64,
    /// Counts at the end of the session
    pub counts: GestureCounts,
}

/// Drives one engine from one landmark source.
///
/// Frames are timestamped by the source, so replays reproduce the debounce
/// behaviour of the original capture.
pub struct TrackingSession<S, C = MonotonicClock> {
    engine: GestureEngine<C>,
    source: S,
    summary: SessionSummary,
    stopped: bool,
}

impl<S: LandmarkSource, C: Clock> TrackingSession<S, C> {
    /// Start a session
    pub fn new(engine: GestureEngine<C>, source: S) -> Self {
        info!("Tracking session started");
        Self {
            engine,
            source,
            summary: SessionSummary::default(),
            stopped: false,
        }
    }

    /// Process the next frame. Returns `Ok(None)` once the source is
    /// exhausted or the session was stopped.
    ///
    /// # Errors
    ///
    /// Propagates errors from the landmark source.
    pub fn step(&mut self) -> Result<Option<GestureCounts>> {
        if self.stopped {
            return Ok(None);
        }

        let Some(timed) = self.source.next_frame()? else {
            debug!("Landmark source exhausted");
            self.stopped = true;
            return Ok(None);
        };

        self.summary.frames_processed += 1;
        if timed.frame.is_empty() {
            self.summary.empty_frames += 1;
        }

        let counts = self.engine.process_frame_at(&timed.frame, timed.timestamp_ms);
        self.summary.counts = counts;
        Ok(Some(counts))
    }

    /// Process frames until the source runs dry, reporting counts after each
    ///
    /// # Errors
    ///
    /// Stops at and returns the first source error.
    pub fn run<F>(&mut self, mut on_counts: F) -> Result<SessionSummary>
    where
        F: FnMut(GestureCounts),
    {
        while let Some(counts) = self.step()? {
            on_counts(counts);
        }

        info!(
            "Tracking session finished after {} frames ({} empty): {}",
            self.summary.frames_processed, self.summary.empty_frames, self.summary.counts
        );
        Ok(self.summary)
    }

    /// Reset counters and calibration without ending the session
    pub fn reset(&mut self) {
        self.engine.reset();
        self.summary.counts = self.engine.snapshot();
    }

    /// Stop pulling frames
    pub fn stop(&mut self) {
        if !self.stopped {
            info!("Tracking session stopped");
        }
        self.stopped = true;
    }

    /// Current counts
    #[must_use]
    pub fn snapshot(&self) -> GestureCounts {
        self.engine.snapshot()
    }

    /// Progress so far
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }
}
