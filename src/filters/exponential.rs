use super::SignalFilter;
use crate::{
    constants::{EXPONENTIAL_ALPHA_MAX, EXPONENTIAL_ALPHA_MIN},
    Error, Result,
};

/// Exponential smoothing filter
///
/// `out = alpha * value + (1 - alpha) * last`. The first sample passes
/// through unless the filter was seeded.
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<f64>,
}

impl ExponentialFilter {
    /// Create a filter, rejecting an alpha outside `(0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilterError`] if alpha is out of range or not finite.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > EXPONENTIAL_ALPHA_MIN && alpha <= EXPONENTIAL_ALPHA_MAX) {
            return Err(Error::FilterError(format!("Alpha must be in (0, 1], got {alpha}")));
        }
        Ok(Self { alpha, last: None })
    }

    /// Start from a known value instead of the first sample
    pub fn seed(&mut self, value: f64) {
        self.last = Some(value);
    }

    /// Current filtered value, if any sample or seed has been seen
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.last
    }

    /// Smoothing factor
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl SignalFilter for ExponentialFilter {
    fn apply(&mut self, value: f64) -> f64 {
        let filtered = match self.last {
            Some(last) => last * (1.0 - self.alpha) + value * self.alpha,
            None => value,
        };
        self.last = Some(filtered);
        filtered
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "ExponentialFilter"
    }
}
