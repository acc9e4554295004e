//! Frame scheduler
//!
//! Fixed-role loop invoked once per display refresh: clamp the elapsed
//! time, run the update step, then always render so the last frame stays
//! visible while paused or ended. The loop itself never terminates -
//! session phase only gates what the update step does, which each game
//! enforces inside its own tick.

use crate::consts::FRAME_CAP;
use crate::input::InputSnapshot;

/// Turns a monotonic clock into clamped per-frame delta times.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call, clamped to `[0, FRAME_CAP]`. The
    /// first call and any non-finite timestamp yield zero.
    pub fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(prev) => (now - prev) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        if dt.is_finite() {
            dt.clamp(0.0, FRAME_CAP)
        } else {
            0.0
        }
    }
}

/// One game wired into the frame loop.
pub trait App {
    /// Advance the simulation by a pre-clamped `dt` in seconds. Runs
    /// integrators, collision resolvers and the opponent controller in that
    /// fixed order; gated internally by session phase.
    fn update(&mut self, input: &InputSnapshot, dt: f32);

    /// Hand the current scene to the render collaborator. Called every
    /// frame regardless of phase.
    fn render(&mut self);
}

/// Per-refresh driver: delta, update, render - in that order, exactly once.
pub struct FrameLoop<A: App> {
    clock: FrameClock,
    pub app: A,
}

impl<A: App> FrameLoop<A> {
    pub fn new(app: A) -> Self {
        Self {
            clock: FrameClock::new(),
            app,
        }
    }

    /// Run one frame at timestamp `now` (seconds).
    pub fn frame(&mut self, now: f64, input: &InputSnapshot) {
        let dt = self.clock.delta(now);
        self.app.update(input, dt);
        self.app.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(10.0), 0.0);
    }

    #[test]
    fn test_clock_clamps_stalls() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        // 5-second stall collapses to the frame cap
        assert_eq!(clock.delta(5.0), FRAME_CAP);
        // Normal 60 Hz cadence passes through
        let dt = clock.delta(5.0 + 1.0 / 60.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_clock_never_negative_or_non_finite() {
        let mut clock = FrameClock::new();
        clock.delta(100.0);
        assert_eq!(clock.delta(50.0), 0.0); // clock went backwards
        assert_eq!(clock.delta(f64::NAN), 0.0);
        let dt = clock.delta(f64::INFINITY);
        assert!(dt.is_finite() && dt >= 0.0);
    }

    #[test]
    fn test_loop_updates_then_renders_every_frame() {
        struct Probe {
            calls: Vec<&'static str>,
        }
        impl App for Probe {
            fn update(&mut self, _input: &InputSnapshot, _dt: f32) {
                self.calls.push("update");
            }
            fn render(&mut self) {
                self.calls.push("render");
            }
        }

        let mut game = FrameLoop::new(Probe { calls: Vec::new() });
        let input = InputSnapshot::default();
        game.frame(0.0, &input);
        game.frame(1.0 / 60.0, &input);
        assert_eq!(game.app.calls, vec!["update", "render", "update", "render"]);
    }
}
