//! Cache Store Module
//!
//! Main cache engine: a HashMap of serialized JSON values with incremental
//! memory accounting and a single global flush rule.
//!
//! # Eviction
//! Every `set` first compares the current usage with the flush threshold.
//! At or above it, every entry is dropped, then the write proceeds. Reads
//! never evict, so usage can stay above the threshold for as long as no
//! write arrives.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, MemoryInfo, FLUSH_THRESHOLD_BYTES, MAX_KEY_LENGTH};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Volatile key/value storage bounded by a global memory flush.
///
/// Not synchronized; the cache server wraps it in `Arc<RwLock<_>>` and takes
/// the write guard for `set`, which makes check, flush, and insert a single
/// critical section.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Sum of entry footprints
    used_bytes: usize,
    /// Flush threshold in bytes
    threshold_bytes: usize,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store flushing at [`FLUSH_THRESHOLD_BYTES`].
    pub fn new() -> Self {
        Self::with_threshold(FLUSH_THRESHOLD_BYTES)
    }

    fn with_threshold(threshold_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            used_bytes: 0,
            threshold_bytes,
            stats: CacheStats::new(),
        }
    }

    /// Store with a small threshold so flush behavior is testable without
    /// allocating 75 MiB.
    #[cfg(test)]
    pub(crate) fn with_test_threshold(threshold_bytes: usize) -> Self {
        Self::with_threshold(threshold_bytes)
    }

    /// Footprint total recomputed from the stored entries.
    #[cfg(test)]
    pub(crate) fn recount_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, entry)| entry.footprint(key))
            .sum()
    }

    // == Set ==
    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// Runs the eviction check before the write. The incoming value's size
    /// does not take part in the check.
    pub fn set(&mut self, key: String, value: &Value) -> Result<()> {
        validate_key(&key)?;

        let serialized = serde_json::to_string(value)
            .map_err(|e| CacheError::Internal(format!("Failed to serialize value: {}", e)))?;

        self.evict_if_over_threshold();

        let entry = CacheEntry::new(serialized);
        self.used_bytes += entry.footprint(&key);
        if let Some(previous) = self.entries.insert(key.clone(), entry) {
            self.used_bytes -= previous.footprint(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        debug!("Stored key '{}' ({} bytes in use)", key, self.used_bytes);

        Ok(())
    }

    // == Get ==
    /// Retrieves the value stored under `key`.
    ///
    /// A stored value that no longer parses as JSON is returned as a JSON
    /// string holding the raw text.
    pub fn get(&mut self, key: &str) -> Result<Value> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Ok(serde_json::from_str(&entry.value)
                    .unwrap_or_else(|_| Value::String(entry.value.clone())))
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        match self.entries.remove(key) {
            Some(entry) => {
                self.used_bytes -= entry.footprint(key);
                self.stats.set_total_entries(self.entries.len());
                Ok(())
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Eviction Check ==
    /// Clears every entry when usage is at or above the threshold.
    ///
    /// Returns true if a flush happened.
    fn evict_if_over_threshold(&mut self) -> bool {
        if self.used_bytes < self.threshold_bytes {
            return false;
        }

        let dropped = self.entries.len();
        let freed = self.used_bytes;
        self.entries.clear();
        self.used_bytes = 0;
        self.stats.record_flush();
        self.stats.set_total_entries(0);

        info!(
            "Memory threshold reached ({} >= {} bytes), flushed {} entries",
            freed, self.threshold_bytes, dropped
        );
        true
    }

    // == Memory ==
    /// Bytes currently accounted to stored entries.
    pub fn memory_used(&self) -> usize {
        self.used_bytes
    }

    pub fn memory_info(&self) -> MemoryInfo {
        MemoryInfo {
            used_bytes: self.used_bytes,
            threshold_bytes: self.threshold_bytes,
            total_entries: self.entries.len(),
            flushes: self.stats.flushes,
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ENTRY_OVERHEAD_BYTES;
    use serde_json::json;

    fn user(id: i64, name: &str) -> Value {
        json!({"id": id, "name": name})
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert!(store.is_empty());
        assert_eq!(store.memory_used(), 0);
        assert_eq!(store.memory_info().threshold_bytes, 75 * 1024 * 1024);
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("user:1".to_string(), &user(1, "alice")).unwrap();

        assert_eq!(store.get("user:1").unwrap(), user(1, "alice"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new();
        assert!(matches!(store.get("user:404"), Err(CacheError::NotFound(_))));
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new();

        store.set("user:1".to_string(), &user(1, "alice")).unwrap();
        store.delete("user:1").unwrap();

        assert!(store.is_empty());
        assert_eq!(store.memory_used(), 0);
        assert!(matches!(store.delete("user:1"), Err(CacheError::NotFound(_))));
    }

    #[test]
    fn test_store_overwrite_replaces_accounting() {
        let mut store = CacheStore::new();

        store.set("k".to_string(), &json!("a")).unwrap();
        store.set("k".to_string(), &json!("abcdef")).unwrap();

        assert_eq!(store.get("k").unwrap(), json!("abcdef"));
        assert_eq!(store.len(), 1);
        // "abcdef" serializes with quotes
        assert_eq!(store.memory_used(), 1 + 8 + ENTRY_OVERHEAD_BYTES);
    }

    #[test]
    fn test_set_below_threshold_keeps_entries() {
        let mut store = CacheStore::with_test_threshold(10_000);

        for id in 0..10 {
            store.set(format!("user:{}", id), &user(id, "x")).unwrap();
        }

        assert_eq!(store.len(), 10);
        assert_eq!(store.stats().flushes, 0);
    }

    #[test]
    fn test_set_at_threshold_flushes_everything_but_new_key() {
        let mut store = CacheStore::with_test_threshold(300);

        let mut id = 0;
        while store.memory_used() < 300 {
            store.set(format!("user:{}", id), &user(id, "filler")).unwrap();
            id += 1;
        }
        let before = store.len();
        assert!(before > 1);

        store.set("name:fresh".to_string(), &user(99, "fresh")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("name:fresh").unwrap(), user(99, "fresh"));
        for old in 0..id {
            assert!(!store.contains(&format!("user:{}", old)));
        }
        assert_eq!(store.stats().flushes, 1);
    }

    #[test]
    fn test_threshold_check_ignores_incoming_size() {
        // One byte under the threshold: the big write goes through without a flush
        let small = 1 + 3 + ENTRY_OVERHEAD_BYTES;
        let mut store = CacheStore::with_test_threshold(small + 1);
        store.set("a".to_string(), &json!("x")).unwrap();
        assert_eq!(store.memory_used(), small);

        store
            .set("b".to_string(), &json!("y".repeat(10_000)))
            .unwrap();

        assert!(store.contains("a"));
        assert!(store.memory_used() > store.memory_info().threshold_bytes);
        assert_eq!(store.stats().flushes, 0);
    }

    #[test]
    fn test_reads_never_flush() {
        let mut store = CacheStore::with_test_threshold(100);
        store.set("a".to_string(), &json!("x".repeat(200))).unwrap();
        assert!(store.memory_info().over_threshold());

        for _ in 0..20 {
            store.get("a").unwrap();
            let _ = store.get("missing");
        }

        assert!(store.contains("a"));
        assert_eq!(store.stats().flushes, 0);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();

        store.set("user:1".to_string(), &user(1, "a")).unwrap();
        store.get("user:1").unwrap();
        let _ = store.get("nonexistent");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_key_validation() {
        let mut store = CacheStore::new();

        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);
        assert!(matches!(
            store.set(long_key, &json!({})),
            Err(CacheError::InvalidRequest(_))
        ));
        assert!(matches!(
            store.set(String::new(), &json!({})),
            Err(CacheError::InvalidRequest(_))
        ));
    }
}
