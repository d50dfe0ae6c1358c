//! End-to-end behaviour of the gesture engine on synthetic face frames


use face_gesture_counter::{
    gesture::{GestureKind, GesturePhase},
    GestureCounts, GestureEngine,
};
use test_helpers::{assert_close, neutral, EYES_CLOSED, EYES_OPEN, MOUTH_OPEN};

fn calibrated_engine(eyebrow_height: f64) -> GestureEngine {
    let mut engine = GestureEngine::with_defaults().unwrap();
    for _ in 0..30 {
        engine.process_frame_at(&neutral().eyebrows(eyebrow_height).build(), 0);
    }
    engine
}

#[test]
fn test_eyebrow_scenario() {
    let mut engine = calibrated_engine(0.10);
    assert!(!engine.calibration().is_calibrated());

    // Frame 31 fixes the baseline and is evaluated against it
    let counts = engine.process_frame_at(&neutral().eyebrows(0.115).build(), 0);
    assert_close(engine.calibration().threshold().unwrap(), 0.012);
    assert_eq!(counts.eyebrow, 1);
    assert_eq!(engine.phase(GestureKind::Eyebrow), GesturePhase::Active);
    // No drift while raised
    assert_close(engine.calibration().baseline().unwrap(), 0.10);

    // Still raised, no re-trigger
    let counts = engine.process_frame_at(&neutral().eyebrows(0.115).build(), 100);
    assert_eq!(counts.eyebrow, 1);
    assert_eq!(engine.phase(GestureKind::Eyebrow), GesturePhase::Active);

    // Drops below the baseline: relaxed, no count
    let counts = engine.process_frame_at(&neutral().eyebrows(0.09).build(), 600);
    assert_eq!(counts.eyebrow, 1);
    assert_eq!(engine.phase(GestureKind::Eyebrow), GesturePhase::Resting);
    assert_close(engine.calibration().baseline().unwrap(), 0.10 * 0.99 + 0.09 * 0.01);

    // 700 ms after the first raise: counted again
    let counts = engine.process_frame_at(&neutral().eyebrows(0.13).build(), 700);
    assert_eq!(counts.eyebrow, 2);
    assert_eq!(engine.recent_events().len(), 1);
    assert_eq!(engine.recent_events()[0].kind, GestureKind::Eyebrow);
}

#[test]
fn test_eyebrow_debounce_blocks_quick_second_raise() {
    let mut engine = calibrated_engine(0.10);
    engine.process_frame_at(&neutral().eyebrows(0.13).build(), 1000);
    engine.process_frame_at(&neutral().eyebrows(0.10).build(), 1100);

    // 400 ms after the first raise
    let counts = engine.process_frame_at(&neutral().eyebrows(0.13).build(), 1400);
    assert_eq!(counts.eyebrow, 1);
    assert_eq!(engine.phase(GestureKind::Eyebrow), GesturePhase::Resting);

    // Held raise becomes countable once the window has passed
    let counts = engine.process_frame_at(&neutral().eyebrows(0.13).build(), 1501);
    assert_eq!(counts.eyebrow, 2);
}

#[test]
fn test_no_eyebrow_events_during_warm_up() {
    let mut engine = GestureEngine::with_defaults().unwrap();
    for i in 0..30_u64 {
        // Wildly varying signal, all of it absorbed by calibration
        let height = if i % 2 == 0 { 0.05 } else { 0.30 };
        let counts = engine.process_frame_at(&neutral().eyebrows(height).build(), i * 1000);
        assert_eq!(counts.eyebrow, 0);
    }
    assert_eq!(engine.calibration().collected(), 30);
}

#[test]
fn test_constant_eyebrow_signal_never_triggers() {
    let mut engine = calibrated_engine(0.08);
    for i in 0..200_u64 {
        engine.process_frame_at(&neutral().eyebrows(0.08).build(), i * 33);
    }

    assert_eq!(engine.snapshot().eyebrow, 0);
    assert_close(engine.calibration().baseline().unwrap(), 0.08);
    assert_close(engine.calibration().threshold().unwrap(), 0.08 * 0.12);
}

#[test]
fn test_blink_debounce() {
    let mut engine = GestureEngine::with_defaults().unwrap();
    let open = neutral().eyes(EYES_OPEN).build();
    let closed = neutral().eyes(EYES_CLOSED).build();

    assert_eq!(engine.process_frame_at(&closed, 0).eye, 1);
    engine.process_frame_at(&open, 50);

    // Second closure within 200 ms of the first
    assert_eq!(engine.process_frame_at(&closed, 150).eye, 1);
    engine.process_frame_at(&open, 180);

    // After 200 ms
    assert_eq!(engine.process_frame_at(&closed, 250).eye, 2);
}

#[test]
fn test_blink_threshold_boundary() {
    let mut engine = GestureEngine::with_defaults().unwrap();

    assert_eq!(engine.process_frame_at(&neutral().eyes(0.019).build(), 0).eye, 0);
    assert_eq!(engine.process_frame_at(&neutral().eyes(0.017).build(), 10).eye, 1);
}

#[test]
fn test_counts_only_on_entry() {
    let mut engine = GestureEngine::with_defaults().unwrap();
    let closed = neutral().eyes(EYES_CLOSED).mouth(MOUTH_OPEN).build();
    let open = neutral().build();

    let mut t = 0;
    for _ in 0..5 {
        engine.process_frame_at(&closed, t);
        t += 33;
    }
    let before = engine.snapshot();
    assert_eq!(before, GestureCounts { eye: 1, eyebrow: 0, mouth: 1 });

    // Returning to rest changes phase, never counts
    let after = engine.process_frame_at(&open, t);
    assert_eq!(after, before);
    assert_eq!(engine.phase(GestureKind::Blink), GesturePhase::Resting);
    assert_eq!(engine.phase(GestureKind::Mouth), GesturePhase::Resting);
}

#[test]
fn test_mouth_has_no_debounce() {
    let mut engine = GestureEngine::with_defaults().unwrap();
    let open = neutral().mouth(MOUTH_OPEN).build();
    let closed = neutral().build();

    // Frame-to-frame flicker around the threshold counts every opening
    for i in 0..4_u64 {
        engine.process_frame_at(&open, i * 2);
        engine.process_frame_at(&closed, i * 2 + 1);
    }
    assert_eq!(engine.snapshot().mouth, 4);
}

#[test]
fn test_mouth_threshold_boundary() {
    let mut engine = GestureEngine::with_defaults().unwrap();
    assert_eq!(engine.process_frame_at(&neutral().mouth(0.049).build(), 0).mouth, 0);
    assert_eq!(engine.process_frame_at(&neutral().mouth(0.051).build(), 1).mouth, 1);
}

#[test]
fn test_gestures_are_independent() {
    let mut engine = calibrated_engine(0.10);
    let everything = neutral().eyes(EYES_CLOSED).eyebrows(0.13).mouth(MOUTH_OPEN).build();

    let counts = engine.process_frame_at(&everything, 0);
    assert_eq!(counts, GestureCounts { eye: 1, eyebrow: 1, mouth: 1 });
    assert_eq!(engine.recent_events().len(), 3);
}
