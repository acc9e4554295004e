//! Per-frame update for the platformer
//!
//! Integration runs through the shared kinematic body; the tile resolver
//! then snaps the player out of solid geometry. The smaller-overlap-axis
//! pushout can mis-resolve a true diagonal corner hit into the wrong axis;
//! that behavior is kept as-is, it is part of how these levels play.

use glam::Vec2;

use crate::consts::*;
use crate::input::InputSnapshot;
use crate::sim::body::MoveLimits;
use crate::sim::Phase;

use super::level::TileKind;
use super::state::{PlatformerEvent, PlatformerState};

const PLAYER_LIMITS: MoveLimits = MoveLimits {
    accel: RUN_ACCEL,
    max_speed: Vec2::new(RUN_MAX_SPEED, MAX_FALL_SPEED),
    friction: RUN_FRICTION,
    gravity: GRAVITY,
};

/// Advance the session by one frame. `dt` is the scheduler's clamped delta
/// in seconds; platformer velocities are pixels per second.
pub fn tick(state: &mut PlatformerState, input: &InputSnapshot, dt: f32) {
    if input.restart {
        state.reset_level();
        state.phase = Phase::Idle;
        return;
    }

    if input.pause {
        match state.phase {
            Phase::Playing => state.phase = Phase::Paused,
            Phase::Paused => state.phase = Phase::Playing,
            _ => {}
        }
    }

    if input.start {
        match state.phase {
            Phase::Idle => state.phase = Phase::Playing,
            Phase::Ended => {
                state.reset_level();
                state.phase = Phase::Playing;
            }
            _ => {}
        }
    }

    if state.phase != Phase::Playing {
        return;
    }

    update_player(state, input, dt);
    update_enemies(state, dt);
    update_camera(state);
}

fn update_player(state: &mut PlatformerState, input: &InputSnapshot, dt: f32) {
    let drive = input.move_dir() as f32;
    if drive != 0.0 {
        state.player.facing = drive;
    }
    if input.wants_jump() && state.player.on_ground {
        state.player.body.vel.y = JUMP_SPEED;
        state.player.on_ground = false;
    }

    state.player.body.advance(dt, drive, &PLAYER_LIMITS);
    resolve_tiles(state);

    // Fallen out of the world
    if state.player.body.pos.y > state.grid.pixel_height() + FALL_OUT_MARGIN {
        log::info!("player fell out, resetting level");
        state.reset_level();
    }
}

/// Snap the player out of overlapping tiles and fire cell side effects.
/// Cells are scanned in row-major order over the body's bounding box plus
/// one cell of margin so a fast body still meets its neighbors.
fn resolve_tiles(state: &mut PlatformerState) {
    let ts = state.grid.tile_size;
    state.player.on_ground = false;

    let size = state.player.body.size;
    let left = (state.player.body.pos.x / ts).floor() as i32 - 1;
    let right = ((state.player.body.pos.x + size.x) / ts).floor() as i32 + 1;
    let top = (state.player.body.pos.y / ts).floor() as i32 - 1;
    let bottom = ((state.player.body.pos.y + size.y) / ts).floor() as i32 + 1;

    for ty in top..=bottom {
        for tx in left..=right {
            let kind = state.grid.get(tx, ty);
            if kind == TileKind::Empty {
                continue;
            }
            let rect = state.grid.cell_rect(tx, ty);
            let body = state.player.body.aabb();

            match kind {
                TileKind::Solid => {
                    let Some(inter) = body.intersect(&rect) else {
                        continue;
                    };
                    if inter.w < inter.h {
                        if body.x < rect.x {
                            state.player.body.pos.x -= inter.w;
                        } else {
                            state.player.body.pos.x += inter.w;
                        }
                        state.player.body.vel.x = 0.0;
                    } else if body.y < rect.y {
                        state.player.body.pos.y -= inter.h;
                        state.player.body.vel.y = 0.0;
                        state.player.on_ground = true;
                    } else {
                        state.player.body.pos.y += inter.h;
                        state.player.body.vel.y = 0.0;
                    }
                }
                TileKind::OneWay => {
                    // Solid only for a non-rising body whose feet are
                    // crossing the top edge from above
                    if state.player.body.vel.y >= 0.0 {
                        let feet = body.bottom();
                        if feet > rect.y && body.y < rect.y {
                            state.player.body.pos.y = rect.y - size.y;
                            state.player.body.vel.y = 0.0;
                            state.player.on_ground = true;
                        }
                    }
                }
                TileKind::SlopeUp | TileKind::SlopeDown => {
                    // Wedge approximation: ride the tile's top once the
                    // body sinks into its lower half
                    if body.intersect(&rect).is_some() && body.bottom() > rect.y + rect.h / 2.0 {
                        state.player.body.pos.y = rect.y - size.y;
                        state.player.body.vel.y = 0.0;
                        state.player.on_ground = true;
                    }
                }
                TileKind::Coin => {
                    // Pickup on cell-center containment, not overlap; the
                    // cleared cell makes a re-check a no-op
                    let c = state.grid.cell_center(tx, ty);
                    if body.contains_point(c.x, c.y) {
                        state.grid.set(tx, ty, TileKind::Empty);
                        state.coins += 1;
                        state.push_event(PlatformerEvent::CoinCollected);
                    }
                }
                TileKind::Goal => {
                    let c = state.grid.cell_center(tx, ty);
                    if state.phase != Phase::Ended && body.contains_point(c.x, c.y) {
                        state.phase = Phase::Ended;
                        state.push_event(PlatformerEvent::GoalReached);
                    }
                }
                TileKind::Empty => unreachable!(),
            }
        }
    }
}

fn update_enemies(state: &mut PlatformerState, dt: f32) {
    let player_rect = state.player.body.aabb();
    let mut hit = false;
    for enemy in &mut state.enemies {
        enemy.body.pos.x += enemy.body.vel.x * dt;
        if enemy.body.pos.x < enemy.left_bound || enemy.body.pos.x > enemy.right_bound {
            enemy.body.vel.x = -enemy.body.vel.x;
        }
        if player_rect.intersect(&enemy.body.aabb()).is_some() {
            hit = true;
        }
    }
    if hit {
        state.push_event(PlatformerEvent::PlayerHurt);
        state.reset_level();
    }
}

/// Center the camera on the player, clamped to the level's pixel bounds.
fn update_camera(state: &mut PlatformerState) {
    let max = (state.grid.pixel_width() - state.view_width).max(0.0);
    let target =
        state.player.body.pos.x - state.view_width / 2.0 + state.player.body.size.x / 2.0;
    state.camera_x = target.floor().clamp(0.0, max);
}
