//! Gesture engine: runs signal extraction, eyebrow calibration and the three
//! gesture state machines once per landmark frame.
//!
//! The engine owns all gesture state for one tracking session. Callers see it
//! only through [`GestureCounts`] snapshots, returned by value, and change it
//! only through [`GestureEngine::reset`].

use crate::{
    calibration::{BaselineCalibrator, CalibrationStatus},
    config::GestureConfig,
    gesture::{GestureEvent, GestureKind, GesturePhase, GestureStateMachine},
    landmarks::LandmarkFrame,
    signals::GestureSignals,
    Result,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fmt, time::Instant};

/// Source of monotonic milliseconds for debouncing
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by [`Instant`], origin at construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start a clock at zero
    #[must_use]
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Counts of each gesture, handed to the presentation layer by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GestureCounts {
    /// Blinks
    pub eye: u64,
    /// Eyebrow raises
    pub eyebrow: u64,
    /// Mouth openings
    pub mouth: u64,
}

impl fmt::Display for GestureCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "blinks: {}, eyebrow raises: {}, mouth openings: {}",
            self.eye, self.eyebrow, self.mouth
        )
    }
}

/// Per-session gesture detector
pub struct GestureEngine<C = MonotonicClock> {
    config: GestureConfig,
    blink: GestureStateMachine,
    eyebrow: GestureStateMachine,
    mouth: GestureStateMachine,
    calibration: BaselineCalibrator,
    recent_events: Vec<GestureEvent>,
    clock: C,
}

impl GestureEngine<MonotonicClock> {
    /// Create an engine timed by the process monotonic clock
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigError`] if the configuration fails
    /// validation.
    pub fn new(config: GestureConfig) -> Result<Self> {
        Self::with_clock(config, MonotonicClock::new())
    }

    /// Create an engine with the default thresholds
    ///
    /// # Errors
    ///
    /// Never fails with the built-in defaults; the `Result` mirrors
    /// [`GestureEngine::new`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(GestureConfig::default())
    }
}

impl<C: Clock> GestureEngine<C> {
    /// Create an engine with an injected clock
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigError`] if the configuration fails
    /// validation.
    pub fn with_clock(config: GestureConfig, clock: C) -> Result<Self> {
        config.validate()?;

        let calibration = BaselineCalibrator::new(
            config.eyebrow.baseline_frames,
            config.eyebrow.threshold_ratio,
            config.eyebrow.adaptation_rate,
        )?;

        Ok(Self {
            blink: GestureStateMachine::new(GestureKind::Blink, Some(config.blink.debounce_ms)),
            eyebrow: GestureStateMachine::new(GestureKind::Eyebrow, Some(config.eyebrow.debounce_ms)),
            mouth: GestureStateMachine::new(GestureKind::Mouth, config.mouth.debounce_ms),
            calibration,
            recent_events: Vec::new(),
            clock,
            config,
        })
    }

    /// Process one frame at the current clock time
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> GestureCounts {
        let now_ms = self.clock.now_ms();
        self.process_frame_at(frame, now_ms)
    }

    /// Process one frame captured at `now_ms`.
    ///
    /// Each gesture is skipped for this frame if its landmarks are missing. An
    /// empty frame changes nothing.
    pub fn process_frame_at(&mut self, frame: &LandmarkFrame, now_ms: u64) -> GestureCounts {
        self.recent_events.clear();

        if frame.is_empty() {
            debug!("Empty landmark frame at {} ms, nothing to do", now_ms);
            return self.snapshot();
        }

        let signals = GestureSignals::extract(frame);

        if let Some(eye) = signals.eye {
            let event = self.blink.update(eye < self.config.blink.threshold, now_ms);
            self.record(event);
        }

        if let Some(eyebrow) = signals.eyebrow {
            self.update_eyebrow(eyebrow, now_ms);
        }

        if let Some(mouth) = signals.mouth {
            let event = self.mouth.update(mouth > self.config.mouth.threshold, now_ms);
            self.record(event);
        }

        self.snapshot()
    }

    fn update_eyebrow(&mut self, signal: f64, now_ms: u64) {
        let CalibrationStatus::Ready { baseline, threshold } = self.calibration.observe(signal) else {
            return;
        };

        let event = self.eyebrow.update(signal > baseline + threshold, now_ms);
        self.record(event);

        // Only drift while relaxed so a held raise is not absorbed
        if self.eyebrow.phase() == GesturePhase::Resting {
            self.calibration.adapt(signal);
        }
    }

    fn record(&mut self, event: Option<GestureEvent>) {
        if let Some(event) = event {
            info!("{} detected at {} ms, total {}", event.kind, event.timestamp_ms, event.count);
            self.recent_events.push(event);
        }
    }

    /// Return every gesture to resting with zero counts and restart eyebrow
    /// calibration
    pub fn reset(&mut self) {
        self.blink.reset();
        self.eyebrow.reset();
        self.mouth.reset();
        self.calibration.reset();
        self.recent_events.clear();
        info!("Counters and calibration reset");
    }

    /// Current counts
    #[must_use]
    pub fn snapshot(&self) -> GestureCounts {
        GestureCounts {
            eye: self.blink.count(),
            eyebrow: self.eyebrow.count(),
            mouth: self.mouth.count(),
        }
    }

    /// Current phase of one gesture
    #[must_use]
    pub fn phase(&self, kind: GestureKind) -> GesturePhase {
        self.machine(kind).phase()
    }

    fn machine(&self, kind: GestureKind) -> &GestureStateMachine {
        match kind {
            GestureKind::Blink => &self.blink,
            GestureKind::Eyebrow => &self.eyebrow,
            GestureKind::Mouth => &self.mouth,
        }
    }

    /// Events counted by the most recent processed frame
    #[must_use]
    pub fn recent_events(&self) -> &[GestureEvent] {
        &self.recent_events
    }

    /// Eyebrow calibration state
    #[must_use]
    pub fn calibration(&self) -> &BaselineCalibrator {
        &self.calibration
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }
}
