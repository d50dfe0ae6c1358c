//! Facial gesture counting from normalized face mesh landmarks.
//!
//! This library turns a stream of landmark frames (468-point face mesh,
//! coordinates normalized to `[0, 1]`) into debounced gesture counts:
//! - blinks, from the eyelid gap of both eyes
//! - eyebrow raises, from eyebrow height above the nose bridge, measured
//!   against a per-session calibrated baseline
//! - mouth openings, from the inner lip gap
//!
//! The processing pipeline for each frame is:
//! 1. Signal extraction, one scalar per gesture
//! 2. Eyebrow baseline calibration (warm-up, then slow drift tracking)
//! 3. One hysteresis state machine per gesture with a debounce window
//!
//! Landmark inference itself is out of scope; frames come from any
//! [`landmarks::LandmarkSource`], including recorded JSON Lines files.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use face_gesture_counter::{engine::GestureEngine, landmarks::{Landmark, LandmarkFrame}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut engine = GestureEngine::with_defaults()?;
//!
//! // A degenerate frame with every point in the same place: eyes closed
//! let frame = LandmarkFrame::new(vec![Landmark::new(0.5, 0.5); 468]);
//! let counts = engine.process_frame_at(&frame, 0);
//! assert_eq!(counts.eye, 1);
//!
//! engine.reset();
//! assert_eq!(engine.snapshot().eye, 0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Replaying a Recording
//!
//! ```no_run
//! use face_gesture_counter::{
//!     config::GestureConfig, engine::GestureEngine, recording::RecordingSource, session::TrackingSession,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GestureConfig::from_file("gestures.yaml")?;
//! let engine = GestureEngine::new(config)?;
//! let source = RecordingSource::open("session.jsonl")?;
//!
//! let mut session = TrackingSession::new(engine, source);
//! let summary = session.run(|counts| println!("{counts}"))?;
//! println!("Processed {} frames", summary.frames_processed);
//! # Ok(())
//! # }
//! ```

/// Landmark frames and frame sources
pub mod landmarks;

/// Per-frame scalar signals for each gesture
pub mod signals;

/// Scalar smoothing filters
pub mod filters;

/// Eyebrow baseline calibration
pub mod calibration;

/// Gesture hysteresis state machines
pub mod gesture;

/// Gesture engine orchestrating signals, calibration and state machines
pub mod engine;

/// Frame delivery loop
pub mod session;

/// JSON Lines landmark recordings
pub mod recording;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use engine::{GestureCounts, GestureEngine};
pub use error::{Error, Result};
