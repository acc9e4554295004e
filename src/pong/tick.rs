//! Per-frame update for the paddle game
//!
//! Session commands are handled first, then physics runs only in the
//! `Playing` phase: player paddle, ball integration and collision
//! resolution, opponent controller - in that fixed order.

use crate::consts::*;
use crate::input::InputSnapshot;
use crate::sim::circle_overlaps_rect;
use crate::sim::{Phase, Side};

use super::ai::drive_opponent;
use super::state::{PongEvent, PongState};

/// Advance the session by one frame. `dt` is the scheduler's clamped delta
/// in seconds; per-frame velocities are scaled by `dt * REF_RATE` so the
/// game plays identically across refresh rates.
pub fn tick(state: &mut PongState, input: &InputSnapshot, dt: f32) {
    if input.restart {
        state.reset();
        return;
    }

    if input.pause {
        match state.phase {
            Phase::Playing => state.phase = Phase::Paused,
            Phase::Paused => state.phase = Phase::Playing,
            // Toggle only; no-op when idle, counting down or ended
            _ => {}
        }
    }

    if input.start {
        match state.phase {
            Phase::Idle => state.serve(),
            Phase::Ended => {
                state.reset();
                state.serve();
            }
            _ => {}
        }
    }

    match state.phase {
        Phase::Countdown { ticks_left } => {
            state.time_ticks += 1;
            let left = ticks_left.saturating_sub(1);
            state.phase = if left == 0 {
                Phase::Playing
            } else {
                Phase::Countdown { ticks_left: left }
            };
        }
        Phase::Playing => {
            state.time_ticks += 1;
            let k = dt * REF_RATE;
            move_player(state, input, k);
            update_ball(state, k);
            drive_opponent(state, k);
        }
        _ => {}
    }
}

/// Apply the tick's input snapshot to the player paddle. Pointer drag
/// positions the paddle directly; otherwise the up/down keys move it at a
/// fixed speed.
fn move_player(state: &mut PongState, input: &InputSnapshot, k: f32) {
    if let Some(py) = input.pointer_y() {
        state.player.y = py - state.player.h / 2.0;
    } else {
        if input.up {
            state.player.y -= PLAYER_PADDLE_SPEED * k;
        }
        if input.down {
            state.player.y += PLAYER_PADDLE_SPEED * k;
        }
    }
    state.player.clamp_to(state.height);
}

fn update_ball(state: &mut PongState, k: f32) {
    let radius = state.ball.radius;
    state.ball.pos += state.ball.vel * k;

    // Top/bottom walls: clamp and invert, no energy loss, no spin
    if state.ball.pos.y - radius < 0.0 {
        state.ball.pos.y = radius;
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(PongEvent::WallBounce);
    } else if state.ball.pos.y + radius > state.height {
        state.ball.pos.y = state.height - radius;
        state.ball.vel.y = -state.ball.vel.y;
        state.push_event(PongEvent::WallBounce);
    }

    // Player paddle: leading edge crossing the near face while within the
    // paddle's vertical extent
    let p = state.player;
    if state.ball.vel.x < 0.0
        && state.ball.pos.x - radius < p.x + p.w
        && state.ball.pos.y > p.y
        && state.ball.pos.y < p.y + p.h
    {
        state.ball.pos.x = p.x + p.w + radius;
        state.ball.vel.x = -state.ball.vel.x * HIT_SPEEDUP;
        let offset = ((state.ball.pos.y - p.center_y()) / (p.h / 2.0)).clamp(-1.0, 1.0);
        state.ball.vel.y += offset * SPIN_FACTOR;
        state.push_event(PongEvent::PaddleHit(Side::Player));
    }

    // Opponent paddle, mirrored
    let o = state.opponent;
    if state.ball.vel.x > 0.0
        && state.ball.pos.x + radius > o.x
        && state.ball.pos.y > o.y
        && state.ball.pos.y < o.y + o.h
    {
        state.ball.pos.x = o.x - radius;
        state.ball.vel.x = -state.ball.vel.x * HIT_SPEEDUP;
        let offset = ((state.ball.pos.y - o.center_y()) / (o.h / 2.0)).clamp(-1.0, 1.0);
        state.ball.vel.y += offset * SPIN_FACTOR;
        state.push_event(PongEvent::PaddleHit(Side::Opponent));
    }

    resolve_block_collision(state);

    // Speed ceiling, every tick and after spin injection - rally growth
    // must not exceed the cap even between hits
    let speed = state.ball.speed();
    if speed > MAX_BALL_SPEED {
        state.ball.vel *= MAX_BALL_SPEED / speed;
    }

    // Scoring: the ball must cross the boundary entirely
    if state.ball.pos.x + radius < 0.0 {
        award_point(state, Side::Opponent);
    } else if state.ball.pos.x - radius > state.width {
        award_point(state, Side::Player);
    }
}

/// At most one block collision per frame, the first found in iteration
/// order. Resolving both of a simultaneous pair would double-reflect.
fn resolve_block_collision(state: &mut PongState) {
    let radius = state.ball.radius;
    let Some(idx) = state
        .blocks
        .iter()
        .position(|b| circle_overlaps_rect(state.ball.pos, radius, &b.rect))
    else {
        return;
    };

    let rect = state.blocks[idx].rect;
    let overlap_x = (state.ball.pos.x + radius - rect.x).min(rect.right() - (state.ball.pos.x - radius));
    let overlap_y = (state.ball.pos.y + radius - rect.y).min(rect.bottom() - (state.ball.pos.y - radius));

    // Push out along the smaller-overlap axis and reflect that component
    if overlap_x < overlap_y {
        if state.ball.pos.x < rect.x {
            state.ball.pos.x = rect.x - radius;
        } else {
            state.ball.pos.x = rect.right() + radius;
        }
        state.ball.vel.x = -state.ball.vel.x * HIT_SPEEDUP;
    } else {
        if state.ball.pos.y < rect.y {
            state.ball.pos.y = rect.y - radius;
        } else {
            state.ball.pos.y = rect.bottom() + radius;
        }
        state.ball.vel.y = -state.ball.vel.y * HIT_SPEEDUP;
    }

    state.blocks[idx].hp -= 1;
    state.push_event(PongEvent::BlockHit);
    if state.blocks[idx].hp == 0 {
        // Removal is atomic with the zeroing hit; nothing else can damage
        // this block in the same pass
        state.blocks.remove(idx);
        state.push_event(PongEvent::BlockDestroyed);
    }
}

fn award_point(state: &mut PongState, side: Side) {
    state.score.add(side);
    state.push_event(PongEvent::PointScored(side));
    if state.score.side(side) >= state.settings.score_limit {
        state.winner = Some(side);
        state.phase = Phase::Ended;
        state.push_event(PongEvent::MatchWon(side));
    } else {
        state.serve();
    }
}
