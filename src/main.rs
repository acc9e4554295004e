//! Headless demo: an AI-vs-AI paddle match followed by a scripted
//! platformer run. Exercises the full simulation stack with no renderer
//! attached; useful for eyeballing log output and profiling.

use minicade::audio::{play_cue, NullAudio};
use minicade::persistence::MemoryStore;
use minicade::platformer::{self, Level, PlatformerState};
use minicade::pong::{self, PongState};
use minicade::settings::Settings;
use minicade::{App, FrameLoop, InputSnapshot, Phase};

const FRAME: f64 = 1.0 / 60.0;

struct HeadlessPong {
    state: PongState,
    audio: NullAudio,
}

impl App for HeadlessPong {
    fn update(&mut self, input: &InputSnapshot, dt: f32) {
        pong::tick(&mut self.state, input, dt);
        for event in self.state.take_events() {
            log::debug!("pong event: {event:?}");
            if self.state.settings.sound {
                if let Some(cue) = event.cue() {
                    play_cue(&mut self.audio, cue);
                }
            }
        }
    }

    fn render(&mut self) {
        // No renderer attached; the scene is still built every frame the
        // way a canvas front end would consume it.
        let scene = self.state.scene();
        if self.state.time_ticks % 600 == 0 && scene.phase == Phase::Playing {
            log::info!(
                "score {}:{}, ball at ({:.0}, {:.0})",
                scene.score.player,
                scene.score.opponent,
                scene.ball_pos.x,
                scene.ball_pos.y
            );
        }
    }
}

fn run_pong_match(settings: Settings, seed: u64) {
    let mut game = FrameLoop::new(HeadlessPong {
        state: PongState::new(settings, seed),
        audio: NullAudio,
    });

    let start = InputSnapshot {
        start: true,
        ..Default::default()
    };
    game.frame(0.0, &start);

    for frame in 1..120_000u64 {
        // Both paddles play themselves: the opponent controller drives the
        // right side, the pointer tracks the ball for the left.
        let input = InputSnapshot {
            pointer_y: Some(game.app.state.ball.pos.y),
            ..Default::default()
        };
        game.frame(frame as f64 * FRAME, &input);
        if game.app.state.phase == Phase::Ended {
            break;
        }
    }

    let state = &game.app.state;
    match state.winner {
        Some(side) => log::info!(
            "match over after {} ticks: {:?} wins {}:{}",
            state.time_ticks,
            side,
            state.score.player,
            state.score.opponent
        ),
        None => log::info!("match still running after the frame budget"),
    }
}

fn run_platformer_demo() {
    let mut state = PlatformerState::new(Level::demo());
    let mut audio = NullAudio;

    let start = InputSnapshot {
        start: true,
        ..Default::default()
    };
    platformer::tick(&mut state, &start, FRAME as f32);

    // Scripted input: run right, hopping continuously.
    let input = InputSnapshot {
        right: true,
        jump: true,
        ..Default::default()
    };
    for _ in 0..3_600 {
        platformer::tick(&mut state, &input, FRAME as f32);
        for event in state.take_events() {
            log::debug!("platformer event: {event:?}");
            play_cue(&mut audio, event.cue());
        }
        if state.phase == Phase::Ended {
            break;
        }
    }

    log::info!(
        "platformer run done: phase {:?}, {} coin(s) collected",
        state.phase,
        state.coins
    );
}

fn main() {
    env_logger::init();

    // Settings come from the persistence collaborator; headless runs get an
    // empty store, so defaults with the obstacle layer switched on.
    let store = MemoryStore::new();
    let mut settings = Settings::load(&store);
    settings.blocks.enabled = true;
    settings.blocks.count = 4;

    run_pong_match(settings, 0xDECAFBAD);
    run_platformer_demo();
}
