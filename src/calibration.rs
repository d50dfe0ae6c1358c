//! Per-session baseline calibration for signals whose resting value depends
//! on the face and camera framing.
//!
//! The calibrator collects a fixed number of warm-up samples, fixes the
//! baseline at their mean and the detection margin at a proportion of it, then
//! lets the baseline drift slowly with an exponential filter. The margin is
//! never recomputed until [`BaselineCalibrator::reset`] is called.

use crate::{
    filters::{exponential::ExponentialFilter, SignalFilter},
    Error, Result,
};
use log::info;

/// Outcome of feeding one sample to the calibrator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationStatus {
    /// Still collecting warm-up samples, no detection allowed
    WarmingUp {
        /// Samples collected so far
        collected: usize,
        /// Samples needed before the baseline is fixed
        required: usize,
    },
    /// Baseline and margin are available
    Ready {
        /// Current resting value
        baseline: f64,
        /// Margin above the baseline that counts as active
        threshold: f64,
    },
}

impl CalibrationStatus {
    /// True once detection may run
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Warm-up window plus drifting baseline
pub struct BaselineCalibrator {
    window: Box<[f64]>,
    filled: usize,
    threshold_ratio: f64,
    baseline: ExponentialFilter,
    threshold: Option<f64>,
}

impl BaselineCalibrator {
    /// Create a calibrator
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty window or a ratio that is
    /// not positive, and [`Error::FilterError`] for an adaptation rate
    /// outside `(0, 1]`.
    pub fn new(window_size: usize, threshold_ratio: f64, adaptation_rate: f64) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidInput(
                "Calibration window size must be greater than 0".to_string(),
            ));
        }
        if !(threshold_ratio.is_finite() && threshold_ratio > 0.0) {
            return Err(Error::InvalidInput(format!(
                "Threshold ratio must be positive, got {threshold_ratio}"
            )));
        }

        Ok(Self {
            window: vec![0.0; window_size].into_boxed_slice(),
            filled: 0,
            threshold_ratio,
            baseline: ExponentialFilter::new(adaptation_rate)?,
            threshold: None,
        })
    }

    /// Feed a raw sample.
    ///
    /// While warming up the sample is stored and `WarmingUp` returned. The
    /// first call after the window is full fixes baseline and threshold; that
    /// call's sample is not stored and is meant to be evaluated against the
    /// result.
    #[allow(clippy::cast_precision_loss)] // window sizes are small
    pub fn observe(&mut self, signal: f64) -> CalibrationStatus {
        if let (Some(threshold), Some(baseline)) = (self.threshold, self.baseline.value()) {
            return CalibrationStatus::Ready { baseline, threshold };
        }

        if self.filled < self.window.len() {
            self.window[self.filled] = signal;
            self.filled += 1;
            return CalibrationStatus::WarmingUp {
                collected: self.filled,
                required: self.window.len(),
            };
        }

        let baseline = self.window.iter().sum::<f64>() / self.window.len() as f64;
        let threshold = baseline * self.threshold_ratio;
        self.baseline.seed(baseline);
        self.threshold = Some(threshold);
        info!(
            "Calibration complete: baseline {:.5}, threshold {:.5} over {} frames",
            baseline,
            threshold,
            self.window.len()
        );

        CalibrationStatus::Ready { baseline, threshold }
    }

    /// Let the baseline follow slow drift. Ignored until calibrated.
    pub fn adapt(&mut self, signal: f64) {
        if self.threshold.is_some() {
            self.baseline.apply(signal);
        }
    }

    /// Drop all samples and the fixed baseline, forcing a fresh warm-up
    pub fn reset(&mut self) {
        self.window.fill(0.0);
        self.filled = 0;
        self.baseline.reset();
        self.threshold = None;
    }

    /// True once baseline and threshold are fixed
    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.threshold.is_some()
    }

    /// Current baseline, `None` while warming up
    #[must_use]
    pub fn baseline(&self) -> Option<f64> {
        self.threshold.and(self.baseline.value())
    }

    /// Fixed margin above the baseline, `None` while warming up
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Warm-up samples collected so far
    #[must_use]
    pub fn collected(&self) -> usize {
        self.filled
    }

    /// Warm-up samples required
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window.len()
    }
}
