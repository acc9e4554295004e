//! Key-value persistence collaborator
//!
//! Settings live in a localStorage-shaped store: string keys, string
//! values, loaded at startup and written on every settings change. The
//! store itself is external; this module only defines the interface plus an
//! in-memory implementation for tests and headless runs.

use std::collections::HashMap;

/// String key-value store.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`KvStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);
        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));
    }
}
