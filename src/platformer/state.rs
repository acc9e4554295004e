//! Platformer session state

use glam::Vec2;

use crate::audio::SoundCue;
use crate::consts::{CANVAS_WIDTH, ENEMY_PATROL, ENEMY_SIZE, ENEMY_SPEED, PLAYER_SIZE};
use crate::sim::body::KinematicBody;
use crate::sim::geom::Rect;
use crate::sim::Phase;

use super::level::{Level, TileGrid};

/// The controllable body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub body: KinematicBody,
    pub on_ground: bool,
    /// -1 or 1, last horizontal intent. Render-facing only.
    pub facing: f32,
}

impl Player {
    pub fn at(spawn: Vec2) -> Self {
        Self {
            body: KinematicBody::new(spawn, PLAYER_SIZE),
            on_ground: false,
            facing: 1.0,
        }
    }
}

/// Fixed-speed patrol body. Reverses at its bounds; touching the player
/// resets the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub body: KinematicBody,
    pub left_bound: f32,
    pub right_bound: f32,
}

impl Enemy {
    pub fn at(spawn: Vec2) -> Self {
        let mut body = KinematicBody::new(spawn, ENEMY_SIZE);
        body.vel.x = ENEMY_SPEED;
        Self {
            body,
            left_bound: spawn.x - ENEMY_PATROL / 2.0,
            right_bound: spawn.x + ENEMY_PATROL / 2.0,
        }
    }
}

/// Side effects raised during a tick, drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformerEvent {
    CoinCollected,
    GoalReached,
    PlayerHurt,
}

impl PlatformerEvent {
    pub fn cue(&self) -> SoundCue {
        match self {
            PlatformerEvent::CoinCollected => SoundCue::Coin,
            PlatformerEvent::GoalReached => SoundCue::Win,
            PlatformerEvent::PlayerHurt => SoundCue::Hurt,
        }
    }
}

/// Everything the platformer tick reads and writes. The pristine level is
/// kept alongside the working grid so a reset restores consumed coins.
#[derive(Debug, Clone)]
pub struct PlatformerState {
    pub level: Level,
    pub grid: TileGrid,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub coins: u32,
    pub phase: Phase,
    pub camera_x: f32,
    pub view_width: f32,
    pub(crate) events: Vec<PlatformerEvent>,
}

impl PlatformerState {
    pub fn new(level: Level) -> Self {
        let grid = level.grid.clone();
        let player = Player::at(level.spawn);
        let enemies = level.enemy_spawns.iter().map(|&s| Enemy::at(s)).collect();
        Self {
            level,
            grid,
            player,
            enemies,
            coins: 0,
            phase: Phase::Idle,
            camera_x: 0.0,
            view_width: CANVAS_WIDTH,
            events: Vec::new(),
        }
    }

    /// Restore the level to its loaded condition: grid, player, enemies,
    /// coins and camera. Deliberately leaves `phase` alone so an in-play
    /// death stays in play.
    pub fn reset_level(&mut self) {
        self.grid = self.level.grid.clone();
        self.player = Player::at(self.level.spawn);
        self.enemies = self.level.enemy_spawns.iter().map(|&s| Enemy::at(s)).collect();
        self.coins = 0;
        self.camera_x = 0.0;
    }

    pub(crate) fn push_event(&mut self, event: PlatformerEvent) {
        self.events.push(event);
    }

    /// Drain the events raised since the last call.
    pub fn take_events(&mut self) -> Vec<PlatformerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Column range the renderer needs for the current camera, end
    /// exclusive and clamped to the grid.
    pub fn visible_columns(&self) -> (i32, i32) {
        let ts = self.grid.tile_size;
        let start = (self.camera_x / ts).floor() as i32;
        let end = start + (self.view_width / ts).ceil() as i32 + 2;
        (start.clamp(0, self.grid.cols()), end.min(self.grid.cols()))
    }

    /// Snapshot handed to the render collaborator each frame.
    pub fn scene(&self) -> PlatformerScene<'_> {
        PlatformerScene {
            grid: &self.grid,
            camera_x: self.camera_x,
            visible_columns: self.visible_columns(),
            player: self.player.body.aabb(),
            facing: self.player.facing,
            enemies: self.enemies.iter().map(|e| e.body.aabb()).collect(),
            coins: self.coins,
            phase: self.phase,
        }
    }
}

/// Read-only view of one frame for the renderer.
#[derive(Debug)]
pub struct PlatformerScene<'a> {
    pub grid: &'a TileGrid,
    pub camera_x: f32,
    pub visible_columns: (i32, i32),
    pub player: Rect,
    pub facing: f32,
    pub enemies: Vec<Rect>,
    pub coins: u32,
    pub phase: Phase,
}
