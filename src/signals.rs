//! Scalar gesture signals derived from a single landmark frame.
//!
//! Every signal is recomputed from the current frame only. Each one depends on
//! its own set of landmark indices, so a frame that is missing the eyebrow
//! points can still yield eye and mouth signals.

use crate::{
    constants::{
        LEFT_EYEBROW, LEFT_EYE_LOWER, LEFT_EYE_UPPER, LOWER_LIP, NOSE_BRIDGE, RIGHT_EYEBROW, RIGHT_EYE_LOWER,
        RIGHT_EYE_UPPER, UPPER_LIP,
    },
    landmarks::LandmarkFrame,
    Result,
};

/// Mean vertical eyelid gap across both eyes. Smaller means more closed.
///
/// # Errors
///
/// Returns [`crate::Error::MissingLandmark`] if any lid landmark is absent.
pub fn eye_signal(frame: &LandmarkFrame) -> Result<f64> {
    let left = (frame.get(LEFT_EYE_UPPER)?.y - frame.get(LEFT_EYE_LOWER)?.y).abs();
    let right = (frame.get(RIGHT_EYE_UPPER)?.y - frame.get(RIGHT_EYE_LOWER)?.y).abs();
    Ok((left + right) / 2.0)
}

/// Height of the eyebrows above the nose bridge.
///
/// Computed as `nose_bridge.y - mean_eyebrow_y`, where the eyebrow height is
/// the mean of the per-side means. Image `y` grows downwards, so raising the
/// eyebrows makes this larger.
///
/// # Errors
///
/// Returns [`crate::Error::MissingLandmark`] if the nose bridge or any
/// eyebrow landmark is absent.
pub fn eyebrow_signal(frame: &LandmarkFrame) -> Result<f64> {
    let reference = frame.get(NOSE_BRIDGE)?.y;
    let left = mean_y(frame, &LEFT_EYEBROW)?;
    let right = mean_y(frame, &RIGHT_EYEBROW)?;
    Ok(reference - (left + right) / 2.0)
}

/// Vertical gap between the inner lips. Larger means more open.
///
/// # Errors
///
/// Returns [`crate::Error::MissingLandmark`] if either lip landmark is absent.
pub fn mouth_signal(frame: &LandmarkFrame) -> Result<f64> {
    Ok((frame.get(UPPER_LIP)?.y - frame.get(LOWER_LIP)?.y).abs())
}

#[allow(clippy::cast_precision_loss)] // index sets are tiny
fn mean_y(frame: &LandmarkFrame, indices: &[usize]) -> Result<f64> {
    let mut sum = 0.0;
    for &index in indices {
        sum += frame.get(index)?.y;
    }
    Ok(sum / indices.len() as f64)
}

/// All three signals for one frame, each present only if its landmarks were
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSignals {
    /// Eyelid gap
    pub eye: Option<f64>,
    /// Eyebrow height above the nose bridge
    pub eyebrow: Option<f64>,
    /// Lip gap
    pub mouth: Option<f64>,
}

impl GestureSignals {
    /// Extract every signal independently
    #[must_use]
    pub fn extract(frame: &LandmarkFrame) -> Self {
        Self {
            eye: skip_missing("eye", eye_signal(frame)),
            eyebrow: skip_missing("eyebrow", eyebrow_signal(frame)),
            mouth: skip_missing("mouth", mouth_signal(frame)),
        }
    }
}

fn skip_missing(name: &str, signal: Result<f64>) -> Option<f64> {
    match signal {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Skipping {} signal for this frame: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::NUM_FACE_MESH_LANDMARKS, landmarks::Landmark};

    fn neutral_frame() -> LandmarkFrame {
        LandmarkFrame::new(vec![Landmark::new(0.5, 0.5); NUM_FACE_MESH_LANDMARKS])
    }

    fn set_y(frame: &mut LandmarkFrame, index: usize, y: f64) {
        if let Some(point) = frame.get_mut(index) {
            point.y = y;
        }
    }

    #[test]
    fn test_eye_signal_averages_both_eyes() {
        let mut frame = neutral_frame();
        set_y(&mut frame, LEFT_EYE_UPPER, 0.40);
        set_y(&mut frame, LEFT_EYE_LOWER, 0.42);
        // Lower lid above upper lid still counts as a positive gap
        set_y(&mut frame, RIGHT_EYE_UPPER, 0.44);
        set_y(&mut frame, RIGHT_EYE_LOWER, 0.40);

        let signal = eye_signal(&frame).unwrap();
        assert!((signal - 0.03).abs() < 1e-10);
    }

    #[test]
    fn test_eyebrow_signal_positive_when_above_bridge() {
        let mut frame = neutral_frame();
        set_y(&mut frame, NOSE_BRIDGE, 0.40);
        for &i in &LEFT_EYEBROW {
            set_y(&mut frame, i, 0.30);
        }
        for &i in &RIGHT_EYEBROW {
            set_y(&mut frame, i, 0.32);
        }

        let signal = eyebrow_signal(&frame).unwrap();
        assert!((signal - 0.09).abs() < 1e-10);
    }

    #[test]
    fn test_mouth_signal() {
        let mut frame = neutral_frame();
        set_y(&mut frame, UPPER_LIP, 0.70);
        set_y(&mut frame, LOWER_LIP, 0.76);

        let signal = mouth_signal(&frame).unwrap();
        assert!((signal - 0.06).abs() < 1e-10);
    }

    #[test]
    fn test_extract_isolates_missing_indices() {
        // 300 points covers lips and left eye but not the right eye (386)
        // or the right eyebrow (336)
        let frame = LandmarkFrame::new(vec![Landmark::new(0.5, 0.5); 300]);
        let signals = GestureSignals::extract(&frame);

        assert!(signals.eye.is_none());
        assert!(signals.eyebrow.is_none());
        assert_eq!(signals.mouth, Some(0.0));
    }
}
