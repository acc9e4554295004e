//! Shared simulation primitives
//!
//! Both games build on the same pieces: axis-aligned geometry, a kinematic
//! body integrator, and the session phase machine. Everything here is pure
//! and deterministic - no rendering, no platform calls, no wall-clock reads.

pub mod body;
pub mod geom;

pub use body::{KinematicBody, MoveLimits};
pub use geom::{Rect, circle_overlaps_rect};

use serde::{Deserialize, Serialize};

/// Which side of the court an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Session phase. Exactly one session is live at a time; all transitions
/// are externally triggered except `Countdown` -> `Playing`, which fires
/// when the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Waiting for an explicit start.
    #[default]
    Idle,
    /// Serve countdown; physics resumes when it hits zero.
    Countdown { ticks_left: u32 },
    /// Live simulation.
    Playing,
    /// Frozen mid-session; the last frame stays on screen.
    Paused,
    /// Win condition reached.
    Ended,
}

impl Phase {
    /// True while a session is underway (live, counting down, or paused).
    pub fn is_running(self) -> bool {
        matches!(
            self,
            Phase::Playing | Phase::Countdown { .. } | Phase::Paused
        )
    }
}
