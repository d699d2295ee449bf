//! Key-value persistence for settings and the high score
//!
//! Storage is best effort. A backend that fails (quota, private mode, no
//! window) or a record that does not decode leaves the documented default in
//! place; nothing here ever surfaces an error to the game.

use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::LocalStore;

/// A flat string key-value backend
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// A value persisted under its own key
pub trait Record: Sized {
    const KEY: &'static str;

    fn encode(&self) -> anyhow::Result<String>;
    fn decode(raw: &str) -> anyhow::Result<Self>;
}

/// Load a record, falling back to `default` on any failure
pub fn load<T: Record>(store: &dyn KeyValueStore, default: T) -> T {
    let raw = match store.get_item(T::KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("No stored {}, using defaults", T::KEY);
            return default;
        }
        Err(e) => {
            log::warn!("Storage unavailable reading {}: {:#}", T::KEY, e);
            return default;
        }
    };

    match T::decode(&raw) {
        Ok(value) => {
            log::info!("Loaded {} from storage", T::KEY);
            value
        }
        Err(e) => {
            log::warn!("Ignoring malformed {}: {:#}", T::KEY, e);
            default
        }
    }
}

/// Save a record; failures are logged and otherwise ignored
pub fn save<T: Record>(store: &mut dyn KeyValueStore, value: &T) {
    let result = value
        .encode()
        .and_then(|raw| store.set_item(T::KEY, &raw));
    if let Err(e) = result {
        log::warn!("Could not save {}: {:#}", T::KEY, e);
    }
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store whose every call fails, like storage in a locked-down browser
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get_item(&self, _key: &str) -> anyhow::Result<Option<String>> {
        anyhow::bail!("storage unavailable")
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage unavailable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HighScore, Settings, Theme};

    #[test]
    fn test_settings_round_trip() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            theme: Theme::Dark,
            reduced_motion: true,
            sound: true,
        };
        save(&mut store, &settings);
        assert_eq!(load(&store, Settings::default()), settings);
    }

    #[test]
    fn test_missing_records_use_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, Settings::default()), Settings::default());
        assert_eq!(load(&store, HighScore::default()), HighScore(0));
    }

    #[test]
    fn test_malformed_records_use_defaults() {
        let mut store = MemoryStore::new();
        store.set_item(Settings::KEY, "{not json").unwrap();
        store.set_item(HighScore::KEY, "lots").unwrap();
        assert_eq!(load(&store, Settings::default()), Settings::default());
        assert_eq!(load(&store, HighScore::default()), HighScore(0));
    }

    #[test]
    fn test_unavailable_storage_is_swallowed() {
        let mut store = UnavailableStore;
        save(&mut store, &HighScore(99));
        save(&mut store, &Settings::default());
        assert_eq!(load(&store, HighScore(5)), HighScore(5));
    }

    #[test]
    fn test_records_use_separate_keys() {
        let mut store = MemoryStore::new();
        save(&mut store, &HighScore(1234));
        save(&mut store, &Settings::default());
        assert_eq!(store.raw(HighScore::KEY), Some("1234"));
        assert!(store.raw(Settings::KEY).is_some());
    }
}
