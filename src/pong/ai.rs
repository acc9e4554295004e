//! Opponent paddle controller
//!
//! Reads the ball, writes only its own paddle. Easy difficulty tracks the
//! ball's current height; normal and hard forward-simulate the trajectory
//! to the paddle's face whenever the ball is inbound.

use crate::sim::Phase;

use super::state::{Ball, PongState};

/// Ignore target deltas smaller than this to keep the paddle from
/// oscillating around the aim point.
const TRACK_DEADZONE: f32 = 6.0;

/// Upper bound on prediction steps; a pathological velocity must not spin
/// the frame.
const PREDICT_MAX_ITERS: u32 = 2000;

/// Move the opponent paddle toward its aim point for this frame. `k` is
/// the frame scale (`dt * REF_RATE`).
pub fn drive_opponent(state: &mut PongState, k: f32) {
    if state.phase != Phase::Playing {
        return;
    }
    let profile = state.settings.difficulty.profile();

    let target = if profile.predictive && state.ball.vel.x > 0.0 {
        predict_y_at_x(&state.ball, state.opponent.x - state.ball.radius, state.height)
    } else {
        state.ball.pos.y
    };

    let diff = target - state.opponent.center_y();
    if diff.abs() > TRACK_DEADZONE {
        let step = profile.speed * profile.reaction * k;
        // Never overshoot the aim point
        state.opponent.y += diff.signum() * step.min(diff.abs());
    }
    state.opponent.clamp_to(state.height);
}

/// Forward-simulate the ball in unit time steps until its x reaches
/// `target_x`, reflecting off the top and bottom walls. Read-only with
/// respect to the live ball. A ball with negligible horizontal velocity
/// would never arrive, so its current height is the best available aim.
pub fn predict_y_at_x(ball: &Ball, target_x: f32, height: f32) -> f32 {
    let mut x = ball.pos.x;
    let mut y = ball.pos.y;
    let vx = ball.vel.x;
    let mut vy = ball.vel.y;

    if vx.abs() < 1e-3 {
        return y;
    }

    let mut iters = 0;
    while (vx > 0.0 && x < target_x) || (vx < 0.0 && x > target_x) {
        x += vx;
        y += vy;
        if y < 0.0 {
            y = -y;
            vy = -vy;
        } else if y > height {
            y = 2.0 * height - y;
            vy = -vy;
        }
        iters += 1;
        if iters >= PREDICT_MAX_ITERS {
            break;
        }
    }
    y
}
