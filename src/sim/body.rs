//! Kinematic body and integrator
//!
//! One integrator serves both games: velocity is updated first (drive
//! acceleration or friction toward zero, per-axis speed clamps, gravity),
//! then position. No sub-stepping is performed - the frame scheduler
//! pre-clamps `dt`, and some tunneling risk at extreme speed is accepted
//! in exchange for simplicity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// Tuning for a driven body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveLimits {
    /// Horizontal drive acceleration (units/s^2).
    pub accel: f32,
    /// Per-axis speed caps (units/s), applied independently.
    pub max_speed: Vec2,
    /// Multiplicative horizontal decay per tick when undriven.
    pub friction: f32,
    /// Downward acceleration (units/s^2); zero for bodies without gravity.
    pub gravity: f32,
}

/// Position/velocity pair with an axis-aligned footprint. Owned exclusively
/// by the entity it represents; collision resolvers snap `pos` and zero or
/// reflect `vel` in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Top-left corner in world units.
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl KinematicBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn aabb(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Advance one step. Velocity first, then `pos += vel * dt`.
    ///
    /// `drive_x` is the horizontal intent in [-1, 1]; non-finite input is
    /// treated as no drive. `dt` must already be clamped by the scheduler.
    pub fn advance(&mut self, dt: f32, drive_x: f32, limits: &MoveLimits) {
        let drive = if drive_x.is_finite() {
            drive_x.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        if drive != 0.0 {
            self.vel.x += drive * limits.accel * dt;
        } else {
            self.vel.x *= limits.friction;
        }
        self.vel.x = self.vel.x.clamp(-limits.max_speed.x, limits.max_speed.x);

        self.vel.y += limits.gravity * dt;
        self.vel.y = self.vel.y.clamp(-limits.max_speed.y, limits.max_speed.y);

        self.pos += self.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_CAP;
    use proptest::prelude::*;

    fn limits() -> MoveLimits {
        MoveLimits {
            accel: 1800.0,
            max_speed: Vec2::new(220.0, 900.0),
            friction: 0.88,
            gravity: 1400.0,
        }
    }

    #[test]
    fn test_velocity_updates_before_position() {
        let mut body = KinematicBody::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let l = MoveLimits {
            gravity: 0.0,
            ..limits()
        };
        body.advance(1.0, 1.0, &l);
        // Full drive for 1s from rest: vel hits the cap, position reflects
        // the post-update velocity, not the pre-update zero.
        assert_eq!(body.vel.x, 220.0);
        assert_eq!(body.pos.x, 220.0);
    }

    #[test]
    fn test_friction_decays_toward_zero() {
        let mut body = KinematicBody::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        body.vel.x = 100.0;
        let l = MoveLimits {
            gravity: 0.0,
            ..limits()
        };
        for _ in 0..200 {
            body.advance(FRAME_CAP, 0.0, &l);
        }
        assert!(body.vel.x.abs() < 0.01);
    }

    #[test]
    fn test_non_finite_drive_is_ignored() {
        let mut body = KinematicBody::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        body.advance(FRAME_CAP, f32::NAN, &limits());
        body.advance(FRAME_CAP, f32::INFINITY, &limits());
        assert!(body.pos.is_finite());
        assert!(body.vel.is_finite());
        assert_eq!(body.vel.x, 0.0);
    }

    proptest! {
        /// For all dt in [0, FRAME_CAP] and any drive, integration never
        /// produces non-finite position or velocity.
        #[test]
        fn prop_state_stays_finite(
            dt in 0.0f32..=FRAME_CAP,
            drive in -2.0f32..2.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            steps in 1usize..200,
        ) {
            let mut body = KinematicBody::new(Vec2::new(100.0, 100.0), Vec2::new(26.0, 30.0));
            body.vel = Vec2::new(vx, vy);
            let l = limits();
            for _ in 0..steps {
                body.advance(dt, drive, &l);
                prop_assert!(body.pos.is_finite());
                prop_assert!(body.vel.is_finite());
                prop_assert!(body.vel.x.abs() <= l.max_speed.x);
                prop_assert!(body.vel.y.abs() <= l.max_speed.y);
            }
        }
    }
}
