//! Level data: tile alphabet, grid storage and `levels.json` parsing
//!
//! Levels arrive as rows of characters, one per cell. Spawn markers are
//! consumed at load time; anything outside the alphabet reads as empty.

use glam::Vec2;
use serde::Deserialize;

use crate::consts::TILE_SIZE;
use crate::sim::geom::Rect;

/// Cell alphabet. `P` and `E` are load-time markers, not cell kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileKind {
    #[default]
    Empty,
    Solid,
    /// Solid only from above while falling.
    OneWay,
    SlopeUp,
    SlopeDown,
    Coin,
    Goal,
}

impl TileKind {
    pub fn from_char(ch: char) -> Self {
        match ch {
            'T' => TileKind::Solid,
            '^' => TileKind::OneWay,
            '/' => TileKind::SlopeUp,
            '\\' => TileKind::SlopeDown,
            'C' => TileKind::Coin,
            'G' => TileKind::Goal,
            _ => TileKind::Empty,
        }
    }
}

/// Row-major grid of typed cells with a fixed edge length. Out-of-range
/// reads yield `Empty` and out-of-range writes are dropped, so resolvers
/// never index-check.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    cols: i32,
    rows: i32,
    pub tile_size: f32,
    cells: Vec<TileKind>,
}

impl TileGrid {
    pub fn new(cols: i32, rows: i32, tile_size: f32) -> Self {
        Self {
            cols: cols.max(0),
            rows: rows.max(0),
            tile_size,
            cells: vec![TileKind::Empty; (cols.max(0) * rows.max(0)) as usize],
        }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn get(&self, tx: i32, ty: i32) -> TileKind {
        if tx < 0 || ty < 0 || tx >= self.cols || ty >= self.rows {
            TileKind::Empty
        } else {
            self.cells[(ty * self.cols + tx) as usize]
        }
    }

    pub fn set(&mut self, tx: i32, ty: i32, kind: TileKind) {
        if tx >= 0 && ty >= 0 && tx < self.cols && ty < self.rows {
            self.cells[(ty * self.cols + tx) as usize] = kind;
        }
    }

    pub fn cell_rect(&self, tx: i32, ty: i32) -> Rect {
        Rect::new(
            tx as f32 * self.tile_size,
            ty as f32 * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    pub fn cell_center(&self, tx: i32, ty: i32) -> Vec2 {
        self.cell_rect(tx, ty).center()
    }

    pub fn pixel_width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    pub fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    pub fn coins_remaining(&self) -> u32 {
        self.cells.iter().filter(|c| **c == TileKind::Coin).count() as u32
    }
}

/// A parsed level: pristine grid plus the spawn points its markers named.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub grid: TileGrid,
    pub spawn: Vec2,
    pub enemy_spawns: Vec<Vec2>,
}

impl Level {
    /// Build a level from row strings. Short rows are padded with empty
    /// cells; `P`/`E` markers become spawn points and clear to empty. A
    /// level without a `P` marker spawns at a fixed default.
    pub fn from_rows(name: &str, rows: &[&str], tile_size: f32) -> Self {
        let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = TileGrid::new(cols, rows.len() as i32, tile_size);
        let mut spawn = None;
        let mut enemy_spawns = Vec::new();

        for (ty, row) in rows.iter().enumerate() {
            for (tx, ch) in row.chars().enumerate() {
                let (tx, ty) = (tx as i32, ty as i32);
                match ch {
                    'P' => spawn = Some(Vec2::new(tx as f32 * tile_size, ty as f32 * tile_size)),
                    'E' => enemy_spawns.push(Vec2::new(tx as f32 * tile_size, ty as f32 * tile_size)),
                    _ => grid.set(tx, ty, TileKind::from_char(ch)),
                }
            }
        }

        Self {
            name: name.to_string(),
            grid,
            spawn: spawn.unwrap_or(Vec2::new(64.0, 64.0)),
            enemy_spawns,
        }
    }

    /// Small built-in level for tests and the headless demo.
    pub fn demo() -> Self {
        Self::from_rows(
            "demo",
            &[
                "....................",
                "..........C.........",
                "....P...^^^....C.G..",
                "..................T.",
                "TTTTTT..TTT/..E.TTT.",
                "TTTTTTTTTTTTTTTTTTTT",
            ],
            TILE_SIZE,
        )
    }
}

#[derive(Debug, Deserialize)]
struct LevelDef {
    #[serde(default)]
    name: String,
    #[serde(rename = "tileSize", default = "default_tile_size")]
    tile_size: f32,
    #[serde(rename = "tiles")]
    rows: Vec<String>,
}

fn default_tile_size() -> f32 {
    TILE_SIZE
}

#[derive(Debug, Deserialize)]
struct LevelFile {
    levels: Vec<LevelDef>,
}

/// Parse a `levels.json`-shaped document into levels.
pub fn parse_level_file(json: &str) -> Result<Vec<Level>, serde_json::Error> {
    let file: LevelFile = serde_json::from_str(json)?;
    Ok(file
        .levels
        .iter()
        .map(|def| {
            let rows: Vec<&str> = def.rows.iter().map(String::as_str).collect();
            Level::from_rows(&def.name, &rows, def.tile_size)
        })
        .collect())
}

/// Like [`parse_level_file`] but unparseable data falls back to the
/// built-in level with a warning.
pub fn load_levels(json: &str) -> Vec<Level> {
    match parse_level_file(json) {
        Ok(levels) if !levels.is_empty() => levels,
        Ok(_) => {
            log::warn!("level file contains no levels, using built-in");
            vec![Level::demo()]
        }
        Err(e) => {
            log::warn!("level file unreadable ({e}), using built-in");
            vec![Level::demo()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_maps_and_unknown_is_empty() {
        assert_eq!(TileKind::from_char('T'), TileKind::Solid);
        assert_eq!(TileKind::from_char('^'), TileKind::OneWay);
        assert_eq!(TileKind::from_char('/'), TileKind::SlopeUp);
        assert_eq!(TileKind::from_char('\\'), TileKind::SlopeDown);
        assert_eq!(TileKind::from_char('C'), TileKind::Coin);
        assert_eq!(TileKind::from_char('G'), TileKind::Goal);
        assert_eq!(TileKind::from_char('.'), TileKind::Empty);
        assert_eq!(TileKind::from_char('z'), TileKind::Empty);
    }

    #[test]
    fn test_grid_out_of_range_reads_empty_writes_dropped() {
        let mut grid = TileGrid::new(4, 3, 32.0);
        grid.set(1, 1, TileKind::Solid);
        assert_eq!(grid.get(1, 1), TileKind::Solid);
        assert_eq!(grid.get(-1, 0), TileKind::Empty);
        assert_eq!(grid.get(0, -1), TileKind::Empty);
        assert_eq!(grid.get(4, 0), TileKind::Empty);
        assert_eq!(grid.get(0, 3), TileKind::Empty);
        grid.set(-1, 0, TileKind::Solid);
        grid.set(4, 2, TileKind::Solid);
        assert_eq!(grid.get(1, 1), TileKind::Solid); // untouched
    }

    #[test]
    fn test_spawn_markers_consumed_at_load() {
        let level = Level::from_rows("t", &["P.E", "TTT"], 32.0);
        assert_eq!(level.spawn, Vec2::new(0.0, 0.0));
        assert_eq!(level.enemy_spawns, vec![Vec2::new(64.0, 0.0)]);
        // Marker cells read back as empty
        assert_eq!(level.grid.get(0, 0), TileKind::Empty);
        assert_eq!(level.grid.get(2, 0), TileKind::Empty);
        assert_eq!(level.grid.get(0, 1), TileKind::Solid);
    }

    #[test]
    fn test_missing_spawn_defaults() {
        let level = Level::from_rows("t", &["...", "TTT"], 32.0);
        assert_eq!(level.spawn, Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_short_rows_pad_with_empty() {
        let level = Level::from_rows("t", &["T", "TTT"], 32.0);
        assert_eq!(level.grid.cols(), 3);
        assert_eq!(level.grid.get(2, 0), TileKind::Empty);
        assert_eq!(level.grid.get(2, 1), TileKind::Solid);
    }

    #[test]
    fn test_parse_level_file() {
        let json = r#"{
            "levels": [
                { "name": "one", "tileSize": 16, "tiles": ["P.C", "TTT"] }
            ]
        }"#;
        let levels = parse_level_file(json).unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].name, "one");
        assert_eq!(levels[0].grid.tile_size, 16.0);
        assert_eq!(levels[0].grid.get(2, 0), TileKind::Coin);
    }

    #[test]
    fn test_load_levels_falls_back_on_garbage() {
        let levels = load_levels("{broken");
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].name, "demo");
    }
}
