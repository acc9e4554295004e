//! Game settings and preferences
//!
//! Persisted as a single JSON blob through the key-value store. Missing or
//! corrupt data falls back to defaults; values are sanitized on load so the
//! simulation never sees a zero score limit or an out-of-range opacity.

use serde::{Deserialize, Serialize};

use crate::persistence::KvStore;

/// Opponent difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Paddle tuning for this difficulty. Easy opponents only react to the
    /// ball's current position; normal and hard predict its trajectory.
    pub fn profile(&self) -> AiProfile {
        match self {
            Difficulty::Easy => AiProfile {
                speed: 3.0,
                reaction: 0.78,
                predictive: false,
            },
            Difficulty::Normal => AiProfile {
                speed: 4.0,
                reaction: 0.92,
                predictive: true,
            },
            Difficulty::Hard => AiProfile {
                speed: 6.0,
                reaction: 0.995,
                predictive: true,
            },
        }
    }
}

/// Opponent paddle tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    /// Base paddle speed (pixels per reference frame).
    pub speed: f32,
    /// Fraction of the base speed actually applied, in (0, 1].
    pub reaction: f32,
    /// Whether to forward-simulate the ball's trajectory.
    pub predictive: bool,
}

/// Destructible-obstacle layer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSettings {
    pub enabled: bool,
    pub count: u32,
    /// Hit points per block.
    pub hits: u32,
    /// Fill color as a CSS hex string; passed through to the renderer.
    pub color: String,
    pub opacity: f32,
}

impl Default for BlockSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            count: 3,
            hits: 2,
            color: "#666666".to_string(),
            opacity: 0.9,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub sound: bool,
    /// First side to reach this score wins the round.
    pub score_limit: u32,
    pub blocks: BlockSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            sound: true,
            score_limit: 5,
            blocks: BlockSettings::default(),
        }
    }
}

impl Settings {
    const STORAGE_KEY: &'static str = "minicade_settings";

    /// Clamp stored values into their valid ranges.
    pub fn sanitized(mut self) -> Self {
        self.score_limit = self.score_limit.max(1);
        self.blocks.hits = self.blocks.hits.max(1);
        self.blocks.count = self.blocks.count.min(64);
        self.blocks.opacity = if self.blocks.opacity.is_finite() {
            self.blocks.opacity.clamp(0.0, 1.0)
        } else {
            0.9
        };
        self
    }

    /// Load from the store; missing or unparseable data yields defaults.
    pub fn load(store: &dyn KvStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Some(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => settings.sanitized(),
                Err(e) => {
                    log::warn!("stored settings unreadable ({e}), using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Write to the store. Serialization of a `Settings` cannot fail, but a
    /// refusal by the store is not ours to surface.
    pub fn save(&self, store: &mut dyn KvStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set(Self::STORAGE_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_save_load_roundtrip() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            difficulty: Difficulty::Hard,
            sound: false,
            score_limit: 11,
            blocks: BlockSettings {
                enabled: true,
                count: 5,
                hits: 3,
                color: "#ff8800".to_string(),
                opacity: 0.5,
            },
        };
        settings.save(&mut store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_corrupt_data_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set("minicade_settings", "{not json");
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_missing_data_falls_back_to_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_sanitize_clamps_stored_values() {
        let s = Settings {
            score_limit: 0,
            blocks: BlockSettings {
                hits: 0,
                opacity: 3.0,
                ..Default::default()
            },
            ..Default::default()
        }
        .sanitized();
        assert_eq!(s.score_limit, 1);
        assert_eq!(s.blocks.hits, 1);
        assert_eq!(s.blocks.opacity, 1.0);
    }

    #[test]
    fn test_difficulty_str_roundtrip() {
        for d in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }
}
