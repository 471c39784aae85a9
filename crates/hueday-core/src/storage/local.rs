//! Browser `localStorage` implementation for WebAssembly.

use super::{KeyValueStore, StorageError, StorageResult};
use web_sys::Storage;

/// `window.localStorage` backed store.
///
/// Note: This is intentionally not Send/Sync since WASM is single-threaded
/// and the storage handle is a JS object.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Grab the page's local storage.
    pub fn new() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("localStorage error: {:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Other(format!("Failed to read {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Throws on quota exhaustion.
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Other(format!("Failed to write {}: {:?}", key, e)))
    }
}
