//! Two-state hysteresis machines that turn a per-frame activity flag into
//! debounced, counted gesture events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gestures tracked by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// Both eyes closing
    Blink,
    /// Eyebrows raised above their resting height
    Eyebrow,
    /// Mouth opening
    Mouth,
}

impl GestureKind {
    /// All gestures in reporting order
    pub const ALL: [Self; 3] = [Self::Blink, Self::Eyebrow, Self::Mouth];

    /// Lowercase name used in logs and recordings
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blink => "blink",
            Self::Eyebrow => "eyebrow",
            Self::Mouth => "mouth",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current phase of a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    /// Eyes open, eyebrows relaxed, mouth closed
    #[default]
    Resting,
    /// Eyes closed, eyebrows raised, mouth open
    Active,
}

/// A counted Resting to Active transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEvent {
    /// Which gesture fired
    pub kind: GestureKind,
    /// Count after this event
    pub count: u64,
    /// Time of the transition in milliseconds
    pub timestamp_ms: u64,
}

/// Hysteresis machine for one gesture.
///
/// Entering `Active` requires the activity flag and, when a debounce window is
/// set, strictly more than that many milliseconds since the last counted
/// event. Leaving `Active` happens on the first inactive frame with no
/// debounce. Only the entry is counted.
#[derive(Debug, Clone)]
pub struct GestureStateMachine {
    kind: GestureKind,
    phase: GesturePhase,
    count: u64,
    last_event_ms: Option<u64>,
    debounce_ms: Option<u64>,
}

impl GestureStateMachine {
    /// Create a machine in the resting phase
    #[must_use]
    pub fn new(kind: GestureKind, debounce_ms: Option<u64>) -> Self {
        Self {
            kind,
            phase: GesturePhase::Resting,
            count: 0,
            last_event_ms: None,
            debounce_ms,
        }
    }

    /// Advance one frame
    pub fn update(&mut self, is_active: bool, now_ms: u64) -> Option<GestureEvent> {
        match (self.phase, is_active) {
            (GesturePhase::Resting, true) if self.debounce_elapsed(now_ms) => {
                self.phase = GesturePhase::Active;
                self.count += 1;
                self.last_event_ms = Some(now_ms);
                Some(GestureEvent {
                    kind: self.kind,
                    count: self.count,
                    timestamp_ms: now_ms,
                })
            }
            (GesturePhase::Active, false) => {
                self.phase = GesturePhase::Resting;
                None
            }
            _ => None,
        }
    }

    fn debounce_elapsed(&self, now_ms: u64) -> bool {
        match (self.debounce_ms, self.last_event_ms) {
            (Some(window), Some(last)) => now_ms.saturating_sub(last) > window,
            _ => true,
        }
    }

    /// Back to resting with a zero count and no event history
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Resting;
        self.count = 0;
        self.last_event_ms = None;
    }

    /// Gesture this machine tracks
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Counted events since creation or the last reset
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Time of the last counted event
    #[must_use]
    pub fn last_event_ms(&self) -> Option<u64> {
        self.last_event_ms
    }
}
