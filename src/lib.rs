//! Minicade - a real-time 2D simulation core for canvas mini-games
//!
//! Core modules:
//! - `sim`: shared simulation primitives (geometry, kinematic bodies, phases)
//! - `pong`: rectangular-arena paddle game (walls, paddles, destructible blocks, AI)
//! - `platformer`: tile-grid platformer (solid/one-way/slope tiles, coins, enemies)
//! - `sched`: frame scheduler (clamped delta-time, update-then-render)
//! - `settings` / `persistence`: preferences behind a key-value store
//! - `audio` / `input`: collaborator interfaces (cues out, snapshots in)
//!
//! Rendering, event capture, tone synthesis and storage live outside this
//! crate; the simulation only talks to them through the interfaces above.

pub mod audio;
pub mod input;
pub mod persistence;
pub mod platformer;
pub mod pong;
pub mod sched;
pub mod settings;
pub mod sim;

pub use input::InputSnapshot;
pub use sched::{App, FrameClock, FrameLoop};
pub use settings::{Difficulty, Settings};
pub use sim::{Phase, Side};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Display rate the per-frame paddle/ball velocities are tuned for.
    pub const REF_RATE: f32 = 60.0;
    /// Upper bound on per-tick delta time (seconds). Prevents tunneling
    /// through thin geometry during frame-rate stalls.
    pub const FRAME_CAP: f32 = 1.0 / 30.0;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    // --- Paddle arena ---

    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const BALL_RADIUS: f32 = 10.0;
    /// Player paddle face offset from the left edge; the opponent mirrors it.
    pub const PADDLE_MARGIN: f32 = 30.0;
    /// Serve speed (pixels per reference frame).
    pub const SERVE_SPEED: f32 = 5.0;
    /// Half-spread of the randomized serve angle (radians).
    pub const SERVE_ANGLE: f32 = 0.3;
    /// Ceiling on ball speed magnitude, enforced every tick.
    pub const MAX_BALL_SPEED: f32 = 12.0;
    /// Multiplier applied to the reflected velocity component on paddle and
    /// block hits; >1 so rallies ratchet up until the speed ceiling.
    pub const HIT_SPEEDUP: f32 = 1.07;
    /// Vertical velocity added per unit of paddle-impact offset.
    pub const SPIN_FACTOR: f32 = 2.0;
    /// Keyboard paddle speed (pixels per reference frame).
    pub const PLAYER_PADDLE_SPEED: f32 = 6.0;
    /// Serve countdown length in ticks (1.5 s at the reference rate).
    pub const SERVE_COUNTDOWN_TICKS: u32 = 90;

    // --- Platformer ---

    pub const TILE_SIZE: f32 = 32.0;
    pub const PLAYER_SIZE: Vec2 = Vec2::new(26.0, 30.0);
    pub const ENEMY_SIZE: Vec2 = Vec2::new(28.0, 28.0);
    /// Horizontal run acceleration (px/s^2).
    pub const RUN_ACCEL: f32 = 1800.0;
    /// Horizontal speed cap (px/s).
    pub const RUN_MAX_SPEED: f32 = 220.0;
    /// Per-tick multiplicative decay when no direction is held.
    pub const RUN_FRICTION: f32 = 0.88;
    /// Jump takeoff velocity (px/s, negative is up).
    pub const JUMP_SPEED: f32 = -520.0;
    /// Gravity (px/s^2).
    pub const GRAVITY: f32 = 1400.0;
    /// Vertical speed cap (px/s).
    pub const MAX_FALL_SPEED: f32 = 900.0;
    /// How far below the grid a body may fall before the level resets.
    pub const FALL_OUT_MARGIN: f32 = 200.0;
    /// Enemy patrol speed (px/s) and default patrol range (px).
    pub const ENEMY_SPEED: f32 = 60.0;
    pub const ENEMY_PATROL: f32 = 120.0;
}
