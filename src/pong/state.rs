//! Paddle-game state and entities

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::SoundCue;
use crate::consts::*;
use crate::settings::{BlockSettings, Settings};
use crate::sim::geom::Rect;
use crate::sim::{Phase, Side};

/// The ball. Velocity is in pixels per reference frame (60 Hz).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A paddle at a fixed x. Velocity is implied by the per-frame delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Keep the paddle fully inside the vertical play area.
    pub fn clamp_to(&mut self, height: f32) {
        self.y = self.y.clamp(0.0, height - self.h);
    }
}

/// A destructible obstacle. Removed the instant `hp` reaches zero,
/// atomically with the hit that zeroed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub hp: u32,
    pub max_hp: u32,
}

impl Block {
    /// Remaining hit points as a fraction, for HP-bar rendering.
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp == 0 {
            0.0
        } else {
            self.hp as f32 / self.max_hp as f32
        }
    }
}

/// Round score. Monotone; reset only on explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn side(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn add(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// Things that happened during a tick. Drained by the caller and mapped to
/// audio cues or UI updates; the simulation never acts on them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongEvent {
    WallBounce,
    PaddleHit(Side),
    BlockHit,
    BlockDestroyed,
    PointScored(Side),
    Serve(Side),
    MatchWon(Side),
}

impl PongEvent {
    /// Audio cue for this event, if it has one.
    pub fn cue(&self) -> Option<SoundCue> {
        match self {
            PongEvent::WallBounce
            | PongEvent::PaddleHit(_)
            | PongEvent::BlockHit
            | PongEvent::BlockDestroyed => Some(SoundCue::Hit),
            PongEvent::PointScored(_) => Some(SoundCue::Score),
            PongEvent::MatchWon(_) => Some(SoundCue::Win),
            PongEvent::Serve(_) => None,
        }
    }
}

/// Complete paddle-game session state. Owns every mutable piece; nothing
/// lives in module globals.
#[derive(Debug, Clone)]
pub struct PongState {
    pub width: f32,
    pub height: f32,
    pub settings: Settings,
    pub phase: Phase,
    /// Set when the phase transitions to `Ended`.
    pub winner: Option<Side>,
    pub score: Score,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub blocks: Vec<Block>,
    /// Who served last; serves alternate.
    pub last_server: Side,
    pub time_ticks: u64,
    rng: Pcg32,
    events: Vec<PongEvent>,
}

impl PongState {
    /// New session on the default canvas, idle until started.
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_size(settings, seed, CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn with_size(settings: Settings, seed: u64, width: f32, height: f32) -> Self {
        let paddle_y = height / 2.0 - PADDLE_HEIGHT / 2.0;
        let mut rng = Pcg32::seed_from_u64(seed);
        let blocks = generate_blocks(&mut rng, &settings.blocks, width, height);
        let mut state = Self {
            width,
            height,
            settings,
            phase: Phase::Idle,
            winner: None,
            score: Score::default(),
            player: Paddle {
                x: PADDLE_MARGIN,
                y: paddle_y,
                w: PADDLE_WIDTH,
                h: PADDLE_HEIGHT,
            },
            opponent: Paddle {
                x: width - PADDLE_MARGIN - PADDLE_WIDTH,
                y: paddle_y,
                w: PADDLE_WIDTH,
                h: PADDLE_HEIGHT,
            },
            ball: Ball {
                pos: Vec2::new(width / 2.0, height / 2.0),
                vel: Vec2::ZERO,
                radius: BALL_RADIUS,
            },
            blocks,
            last_server: Side::Opponent,
            time_ticks: 0,
            rng,
            events: Vec::new(),
        };
        state.ball = state.random_ball(None);
        state
    }

    pub(crate) fn push_event(&mut self, event: PongEvent) {
        self.events.push(event);
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<PongEvent> {
        std::mem::take(&mut self.events)
    }

    /// A centered ball with a fresh randomized direction. `toward` pins the
    /// horizontal direction; `None` picks one at random.
    fn random_ball(&mut self, toward: Option<Side>) -> Ball {
        let angle = self.rng.random_range(-SERVE_ANGLE..SERVE_ANGLE);
        let dir = match toward {
            Some(Side::Opponent) => 1.0,
            Some(Side::Player) => -1.0,
            None => {
                if self.rng.random_bool(0.5) {
                    1.0
                } else {
                    -1.0
                }
            }
        };
        Ball {
            pos: Vec2::new(self.width / 2.0, self.height / 2.0),
            vel: Vec2::new(dir * SERVE_SPEED * angle.cos(), SERVE_SPEED * angle.sin()),
            radius: BALL_RADIUS,
        }
    }

    /// Respawn the ball at center and start the serve countdown. The server
    /// alternates; the ball travels away from whoever serves.
    pub fn serve(&mut self) {
        let server = self.last_server.other();
        self.last_server = server;
        self.ball = self.random_ball(Some(server.other()));
        self.phase = Phase::Countdown {
            ticks_left: SERVE_COUNTDOWN_TICKS,
        };
        self.push_event(PongEvent::Serve(server));
    }

    /// Full reset: scores, paddles, ball, blocks. Phase returns to idle.
    pub fn reset(&mut self) {
        let paddle_y = self.height / 2.0 - PADDLE_HEIGHT / 2.0;
        self.score = Score::default();
        self.winner = None;
        self.player.y = paddle_y;
        self.opponent.y = paddle_y;
        self.blocks = generate_blocks(&mut self.rng, &self.settings.blocks, self.width, self.height);
        self.ball = self.random_ball(None);
        self.phase = Phase::Idle;
        self.time_ticks = 0;
    }

    /// Scene handed to the render collaborator once per tick. The core
    /// never reads anything back.
    pub fn scene(&self) -> PongScene<'_> {
        PongScene {
            width: self.width,
            height: self.height,
            player: self.player.rect(),
            opponent: self.opponent.rect(),
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            blocks: &self.blocks,
            block_style: &self.settings.blocks,
            score: self.score,
            phase: self.phase,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct PongScene<'a> {
    pub width: f32,
    pub height: f32,
    pub player: Rect,
    pub opponent: Rect,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub blocks: &'a [Block],
    pub block_style: &'a BlockSettings,
    pub score: Score,
    pub phase: Phase,
}

/// Random non-overlapping obstacle placement, kept clear of both paddle
/// lanes. Bails after a fixed attempt budget rather than looping forever on
/// a crowded canvas.
fn generate_blocks(rng: &mut Pcg32, cfg: &BlockSettings, width: f32, height: f32) -> Vec<Block> {
    let mut blocks = Vec::new();
    if !cfg.enabled || cfg.count == 0 {
        return blocks;
    }

    let w = (width * 0.06).floor().max(28.0);
    let h = (height * 0.06).floor().max(18.0);
    let padding = 20.0;
    let x_span = width - padding * 2.0 - w;
    let y_span = height - padding * 2.0 - h;
    if x_span <= 0.0 || y_span <= 0.0 {
        log::warn!("canvas too small for obstacles, skipping generation");
        return blocks;
    }

    let hp = cfg.hits.max(1);
    let mut attempts = 0;
    while blocks.len() < cfg.count as usize && attempts < 400 {
        attempts += 1;
        let x = (padding + rng.random_range(0.0..x_span)).floor();
        let y = (padding + rng.random_range(0.0..y_span)).floor();
        // keep both paddle approach lanes clear
        if x < PADDLE_MARGIN + 160.0 || x + w > width - 160.0 {
            continue;
        }
        let rect = Rect::new(x, y, w, h);
        let crowded = blocks.iter().any(|b: &Block| {
            !(rect.right() < b.rect.x
                || rect.x > b.rect.right()
                || rect.bottom() < b.rect.y
                || rect.y > b.rect.bottom())
        });
        if crowded {
            continue;
        }
        blocks.push(Block {
            rect,
            hp,
            max_hp: hp,
        });
    }
    blocks
}
