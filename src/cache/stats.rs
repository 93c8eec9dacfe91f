//! Cache Statistics Module
//!
//! Tracks hits, misses, and global flushes, plus the memory snapshot
//! reported by the memory endpoint.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals
    pub misses: u64,
    /// Number of global flushes triggered by the memory threshold
    pub flushes: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_flush(&mut self) {
        self.flushes += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Memory Info ==
/// Snapshot of the cache's memory accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    /// Bytes currently accounted to stored entries
    pub used_bytes: usize,
    /// Usage at or above which the next write flushes everything
    pub threshold_bytes: usize,
    pub total_entries: usize,
    pub flushes: u64,
}

impl MemoryInfo {
    /// True when the next `set` will flush the whole cache.
    pub fn over_threshold(&self) -> bool {
        self.used_bytes >= self.threshold_bytes
    }
}
