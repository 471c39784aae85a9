//! Persisted record of viewed and copied colors.

use super::{KeyValueStore, StorageResult};
use crate::color::ColorEntry;

/// Key holding the full session history as of the last advance.
pub const VIEWED_COLORS_KEY: &str = "viewedColors";

/// Key holding every color ever copied, deduplicated by hex.
pub const COPIED_COLORS_KEY: &str = "copiedColors";

/// Writes viewed and copied colors to a key-value store.
///
/// Both lists are stored as JSON arrays of `{hex, name}` and are always
/// rewritten whole.
pub struct ColorLog {
    store: Box<dyn KeyValueStore>,
}

impl ColorLog {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Replace the stored history with `entries`.
    pub fn record_viewed(&self, entries: &[ColorEntry]) -> StorageResult<()> {
        let json = serde_json::to_string(entries)?;
        self.store.set(VIEWED_COLORS_KEY, &json)
    }

    /// Last recorded history (empty if none).
    #[cfg(test)]
    pub fn viewed(&self) -> StorageResult<Vec<ColorEntry>> {
        self.read_list(VIEWED_COLORS_KEY)
    }

    /// Every copied color, in first-copy order.
    pub fn copied(&self) -> StorageResult<Vec<ColorEntry>> {
        self.read_list(COPIED_COLORS_KEY)
    }

    /// Add `entry` to the copied list unless its hex is already there.
    ///
    /// Returns true if the list grew. An unreadable stored list is an
    /// error and is left as it is.
    pub fn record_copied(&self, entry: &ColorEntry) -> StorageResult<bool> {
        let mut copied = self.copied()?;

        if copied.iter().any(|c| c.hex == entry.hex) {
            return Ok(false);
        }

        copied.push(entry.clone());
        let json = serde_json::to_string(&copied)?;
        self.store.set(COPIED_COLORS_KEY, &json)?;
        Ok(true)
    }

    fn read_list(&self, key: &str) -> StorageResult<Vec<ColorEntry>> {
        match self.store.get(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::storage::{MemoryStore, StorageError};
    use std::sync::Arc;

    fn entry(hex: &str, name: &str) -> ColorEntry {
        ColorEntry::new(HexColor::parse(hex).unwrap(), name)
    }

    #[test]
    fn test_record_viewed_overwrites() {
        let store = Arc::new(MemoryStore::new());
        let log = ColorLog::new(Box::new(store.clone()));

        log.record_viewed(&[entry("#112233", "A")]).unwrap();
        log.record_viewed(&[entry("#112233", "A"), entry("#445566", "B")]).unwrap();

        assert_eq!(log.viewed().unwrap().len(), 2);
        assert_eq!(
            store.get(VIEWED_COLORS_KEY).unwrap().unwrap(),
            r##"[{"hex":"#112233","name":"A"},{"hex":"#445566","name":"B"}]"##
        );
    }

    #[test]
    fn test_record_copied_deduplicates_by_hex() {
        let log = ColorLog::new(Box::new(MemoryStore::new()));
        let a = entry("#aabbcc", "A");

        assert!(log.record_copied(&a).unwrap());
        assert!(!log.record_copied(&a).unwrap());
        assert!(!log.record_copied(&entry("#AABBCC", "Renamed")).unwrap());
        assert_eq!(log.copied().unwrap(), vec![a]);
    }

    #[test]
    fn test_record_copied_preserves_first_copy_order() {
        let log = ColorLog::new(Box::new(MemoryStore::new()));
        let a = entry("#000001", "A");
        let b = entry("#000002", "B");
        let c = entry("#000003", "C");

        for e in [&b, &a, &b, &c, &a] {
            log.record_copied(e).unwrap();
        }
        assert_eq!(log.copied().unwrap(), vec![b, a, c]);
    }

    #[test]
    fn test_empty_store_reads_empty_lists() {
        let log = ColorLog::new(Box::new(MemoryStore::new()));
        assert!(log.viewed().unwrap().is_empty());
        assert!(log.copied().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_copied_list_is_left_untouched() {
        let truncated = r##"[{"hex":"#000001","name":"A"},{"hex":"#0000"##;
        let store = Arc::new(MemoryStore::new());
        store.set(COPIED_COLORS_KEY, truncated).unwrap();
        let log = ColorLog::new(Box::new(store.clone()));

        assert!(matches!(log.copied(), Err(StorageError::Serialization(_))));
        assert!(matches!(
            log.record_copied(&entry("#090909", "X")),
            Err(StorageError::Serialization(_))
        ));
        assert_eq!(store.get(COPIED_COLORS_KEY).unwrap().as_deref(), Some(truncated));
    }
}
