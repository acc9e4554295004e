//! Tile-based platformer
//!
//! Levels are character grids; the player is a driven kinematic body
//! resolved against typed cells, with patrol enemies and a scrolling
//! camera window for the renderer.

pub mod level;
pub mod state;
pub mod tick;

pub use level::{load_levels, parse_level_file, Level, TileGrid, TileKind};
pub use state::{Enemy, PlatformerEvent, PlatformerScene, PlatformerState, Player};
pub use tick::tick;
