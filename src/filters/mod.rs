//! Single-channel smoothing filters for gesture signals.
//!
//! The eyebrow baseline tracks slow drift in resting eyebrow height with an
//! exponential filter once calibration has fixed its starting point.

/// Exponential filter for slow drift tracking
pub mod exponential;

/// Trait for all scalar signal filters
pub trait SignalFilter: Send + Sync {
    /// Feed one sample and return the filtered value
    fn apply(&mut self, value: f64) -> f64;

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}
