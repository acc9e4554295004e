//! Rectangular-arena paddle game
//!
//! One parameterized engine covers the whole family: difficulty table,
//! optional destructible-obstacle layer, reactive or predictive opponent.

pub mod ai;
pub mod state;
pub mod tick;

pub use ai::predict_y_at_x;
pub use state::{Ball, Block, Paddle, PongEvent, PongScene, PongState, Score};
pub use tick::tick;
