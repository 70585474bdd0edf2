//! Playback state machine
//!
//! Tracks play/pause/seek/reset and advances progress over wall-clock
//! time. Progress is a scalar in [0, 1] denoting how much of the
//! trajectory is currently traversed. Timestamps come from the external
//! render loop (milliseconds); the controller never reads a clock itself.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Playback phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// Nothing played yet, or reset: progress is 0
    Idle,
    /// Advancing with every tick
    Playing,
    /// Stopped partway; progress holds its value
    Paused,
    /// Progress reached 1
    Completed,
}

impl std::fmt::Display for PlaybackPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Playing => write!(f, "Playing"),
            Self::Paused => write!(f, "Paused"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Time-based, scrubable playback controller.
///
/// `last_tick` is `None` whenever playback is not advancing, so the first
/// tick after entering Playing only captures the timestamp and applies no
/// delta, so a resume never causes a progress jump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackController {
    progress: f64,
    phase: PlaybackPhase,
    last_tick: Option<f64>,
    duration_ms: f64,
}

impl PlaybackController {
    /// Create a controller for a traversal of the given duration
    /// (milliseconds). The duration is constant for the lifetime of one
    /// loaded path.
    pub fn new(duration_ms: f64) -> Self {
        debug_assert!(
            duration_ms.is_finite() && duration_ms > 0.0,
            "playback duration must be positive, got {duration_ms}"
        );
        Self {
            progress: 0.0,
            phase: PlaybackPhase::Idle,
            last_tick: None,
            duration_ms,
        }
    }

    /// Current progress in [0, 1].
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// True while ticks advance progress.
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    /// Configured traversal duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Start or resume playback. From Completed, progress rewinds to 0
    /// first (restart-from-end semantics). No-op while already Playing.
    pub fn play(&mut self) {
        if self.phase == PlaybackPhase::Playing {
            return;
        }
        if self.phase == PlaybackPhase::Completed {
            self.progress = 0.0;
        }
        self.phase = PlaybackPhase::Playing;
        self.last_tick = None;
        trace!("Playback started at progress {:.4}", self.progress);
    }

    /// Pause playback. No-op unless Playing.
    pub fn pause(&mut self) {
        if self.phase != PlaybackPhase::Playing {
            return;
        }
        self.phase = PlaybackPhase::Paused;
        self.last_tick = None;
        trace!("Playback paused at progress {:.4}", self.progress);
    }

    /// Return to Idle with progress 0, cancelling any tick bookkeeping.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.phase = PlaybackPhase::Idle;
        self.last_tick = None;
    }

    /// Jump directly to a progress value, independent of elapsed time.
    /// The value is clamped to [0, 1]; playback stops, landing on
    /// Completed when the clamped value is 1 and Paused otherwise.
    pub fn seek(&mut self, value: f64) {
        self.progress = value.clamp(0.0, 1.0);
        self.phase = if self.progress >= 1.0 {
            PlaybackPhase::Completed
        } else {
            PlaybackPhase::Paused
        };
        self.last_tick = None;
        trace!("Seek to progress {:.4} ({})", self.progress, self.phase);
    }

    /// Advance progress from a render-loop timestamp (milliseconds).
    ///
    /// Only meaningful while Playing; otherwise a no-op. The first tick
    /// after entering Playing captures the timestamp without applying a
    /// delta. Returns true while further ticks should be scheduled.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.phase != PlaybackPhase::Playing {
            return false;
        }

        let Some(last) = self.last_tick else {
            self.last_tick = Some(now_ms);
            return true;
        };

        // A timestamp going backwards contributes nothing; progress is
        // monotonically non-decreasing while Playing.
        let delta = (now_ms - last).max(0.0);
        self.last_tick = Some(now_ms);
        self.progress = (self.progress + delta / self.duration_ms).min(1.0);

        if self.progress >= 1.0 {
            self.phase = PlaybackPhase::Completed;
            self.last_tick = None;
            trace!("Playback completed");
            return false;
        }

        true
    }
}
