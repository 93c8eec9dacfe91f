//! Cache Entry Module
//!
//! Defines a single cache entry and its contribution to memory usage.

use chrono::{DateTime, Utc};

/// Fixed bookkeeping cost charged per entry on top of key and value bytes.
///
/// Approximates the map slot, the two `String` headers, and the timestamp.
pub const ENTRY_OVERHEAD_BYTES: usize = 64;

// == Cache Entry ==
/// A stored value: the serialized JSON document plus creation time.
///
/// The timestamp is diagnostic only; entries never expire.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized JSON value
    pub value: String,
    /// When this value was written
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    pub fn new(value: String) -> Self {
        Self {
            value,
            created_at: Utc::now(),
        }
    }

    // == Footprint ==
    /// Bytes this entry accounts for when stored under `key`.
    pub fn footprint(&self, key: &str) -> usize {
        key.len() + self.value.len() + ENTRY_OVERHEAD_BYTES
    }
}
