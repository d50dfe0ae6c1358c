//! Constants used throughout the library

/// Number of points in the face mesh topology
pub const NUM_FACE_MESH_LANDMARKS: usize = 468;

/// Left eye upper / lower lid
pub const LEFT_EYE_UPPER: usize = 159;
pub const LEFT_EYE_LOWER: usize = 145;

/// Right eye upper / lower lid
pub const RIGHT_EYE_UPPER: usize = 386;
pub const RIGHT_EYE_LOWER: usize = 374;

/// Nose bridge between the eyes. Does not move with the eyelids.
pub const NOSE_BRIDGE: usize = 168;

/// Eyebrow point sets
pub const LEFT_EYEBROW: [usize; 5] = [70, 63, 105, 66, 107];
pub const RIGHT_EYEBROW: [usize; 5] = [336, 296, 334, 293, 300];

/// Inner upper / lower lip
pub const UPPER_LIP: usize = 13;
pub const LOWER_LIP: usize = 14;

/// Blink defaults
pub const DEFAULT_BLINK_THRESHOLD: f64 = 0.018;
pub const DEFAULT_BLINK_DEBOUNCE_MS: u64 = 200;

/// Eyebrow defaults
pub const DEFAULT_EYEBROW_BASELINE_FRAMES: usize = 30;
/// Largest accepted warm-up window, about five minutes at 30 fps
pub const MAX_EYEBROW_BASELINE_FRAMES: usize = 10_000;
pub const DEFAULT_EYEBROW_THRESHOLD_RATIO: f64 = 0.12;
pub const DEFAULT_EYEBROW_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_EYEBROW_ADAPTATION_RATE: f64 = 0.01;

/// Mouth defaults
pub const DEFAULT_MOUTH_THRESHOLD: f64 = 0.05;

/// Exponential filter bounds
pub const EXPONENTIAL_ALPHA_MIN: f64 = 0.0;
pub const EXPONENTIAL_ALPHA_MAX: f64 = 1.0;
