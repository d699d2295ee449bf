//! Browser LocalStorage backend

use anyhow::anyhow;

use super::KeyValueStore;

/// `window.localStorage`, looked up on every call so a missing or revoked
/// storage area degrades to an error instead of a panic
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> anyhow::Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| anyhow!("no window"))?
            .local_storage()
            .map_err(|e| anyhow!("localStorage access denied: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage not available"))
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| anyhow!("getItem({}) failed: {:?}", key, e))
    }

    fn set_item(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("setItem({}) failed: {:?}", key, e))
    }
}
