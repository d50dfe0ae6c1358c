//! Configuration for the gesture engine

use crate::{
    constants::{
        DEFAULT_BLINK_DEBOUNCE_MS, DEFAULT_BLINK_THRESHOLD, DEFAULT_EYEBROW_ADAPTATION_RATE,
        DEFAULT_EYEBROW_BASELINE_FRAMES, DEFAULT_EYEBROW_DEBOUNCE_MS, DEFAULT_EYEBROW_THRESHOLD_RATIO,
        DEFAULT_MOUTH_THRESHOLD, MAX_EYEBROW_BASELINE_FRAMES,
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Gesture detection configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Blink detection configuration
    pub blink: BlinkConfig,

    /// Eyebrow raise detection configuration
    pub eyebrow: EyebrowConfig,

    /// Mouth open detection configuration
    pub mouth: MouthConfig,
}

/// Blink parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkConfig {
    /// Eyelid gap below which the eyes count as closed
    pub threshold: f64,

    /// Minimum time between two counted blinks
    pub debounce_ms: u64,
}

/// Eyebrow parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyebrowConfig {
    /// Frames collected before the resting baseline is fixed
    pub baseline_frames: usize,

    /// Raise margin as a fraction of the baseline
    pub threshold_ratio: f64,

    /// Minimum time between two counted raises
    pub debounce_ms: u64,

    /// Per-frame weight of new samples in the drifting baseline
    pub adaptation_rate: f64,
}

/// Mouth parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouthConfig {
    /// Lip gap above which the mouth counts as open
    pub threshold: f64,

    /// Minimum time between two counted openings. Unset by default, so every
    /// closed-to-open crossing counts.
    pub debounce_ms: Option<u64>,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_BLINK_THRESHOLD,
            debounce_ms: DEFAULT_BLINK_DEBOUNCE_MS,
        }
    }
}

impl Default for EyebrowConfig {
    fn default() -> Self {
        Self {
            baseline_frames: DEFAULT_EYEBROW_BASELINE_FRAMES,
            threshold_ratio: DEFAULT_EYEBROW_THRESHOLD_RATIO,
            debounce_ms: DEFAULT_EYEBROW_DEBOUNCE_MS,
            adaptation_rate: DEFAULT_EYEBROW_ADAPTATION_RATE,
        }
    }
}

impl Default for MouthConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MOUTH_THRESHOLD,
            debounce_ms: None,
        }
    }
}

impl GestureConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid YAML for this
    /// structure.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if !(self.blink.threshold.is_finite() && self.blink.threshold > 0.0) {
            return Err(Error::ConfigError("Blink threshold must be positive".to_string()));
        }

        if self.eyebrow.baseline_frames == 0 || self.eyebrow.baseline_frames > MAX_EYEBROW_BASELINE_FRAMES {
            return Err(Error::ConfigError(format!(
                "Eyebrow baseline frame count must be in 1..={MAX_EYEBROW_BASELINE_FRAMES}, got {}",
                self.eyebrow.baseline_frames
            )));
        }
        if !(self.eyebrow.threshold_ratio > 0.0 && self.eyebrow.threshold_ratio <= 1.0) {
            return Err(Error::ConfigError(
                "Eyebrow threshold ratio must be in (0, 1]".to_string(),
            ));
        }
        if !(self.eyebrow.adaptation_rate > 0.0 && self.eyebrow.adaptation_rate < 1.0) {
            return Err(Error::ConfigError(
                "Eyebrow adaptation rate must be in (0, 1)".to_string(),
            ));
        }

        if !(self.mouth.threshold.is_finite() && self.mouth.threshold > 0.0) {
            return Err(Error::ConfigError("Mouth threshold must be positive".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Gesture Counter Configuration

# Blink: eyelid gap averaged over both eyes
blink:
  threshold: 0.018
  debounce_ms: 200

# Eyebrow raise: height above the nose bridge, relative to a calibrated baseline
eyebrow:
  baseline_frames: 30
  threshold_ratio: 0.12
  debounce_ms: 500
  adaptation_rate: 0.01

# Mouth open: inner lip gap
mouth:
  threshold: 0.05
  # debounce_ms: 300
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed = GestureConfig::from_yaml(EXAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, GestureConfig::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed = GestureConfig::from_yaml("blink:\n  threshold: 0.02\n").unwrap();
        assert_eq!(parsed.blink.threshold, 0.02);
        assert_eq!(parsed.blink.debounce_ms, 200);
        assert_eq!(parsed.eyebrow, EyebrowConfig::default());
        assert_eq!(parsed.mouth.debounce_ms, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GestureConfig::default();
        config.eyebrow.baseline_frames = 0;
        assert!(config.validate().is_err());
        config.eyebrow.baseline_frames = MAX_EYEBROW_BASELINE_FRAMES + 1;
        assert!(config.validate().is_err());
        config.eyebrow.baseline_frames = MAX_EYEBROW_BASELINE_FRAMES;
        assert!(config.validate().is_ok());

        let mut config = GestureConfig::default();
        config.eyebrow.threshold_ratio = 1.5;
        assert!(config.validate().is_err());

        let mut config = GestureConfig::default();
        config.eyebrow.adaptation_rate = 1.0;
        assert!(config.validate().is_err());
        config.eyebrow.adaptation_rate = 0.0;
        assert!(config.validate().is_err());

        let mut config = GestureConfig::default();
        config.blink.threshold = -0.1;
        assert!(config.validate().is_err());

        let mut config = GestureConfig::default();
        config.mouth.threshold = f64::NAN;
        assert!(config.validate().is_err());
    }
}
