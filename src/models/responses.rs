//! Response DTOs
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::cache::{CacheStats, MemoryInfo};

/// Response body for a cache write (POST /cache/:key)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreResponse {
    /// Always "stored"
    pub status: String,
    /// The key that was set
    pub key: String,
}

impl StoreResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            status: "stored".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for a cache delete (DELETE /cache/:key)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always "deleted"
    pub status: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            status: "deleted".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for the memory endpoint (GET /cache/memory)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryInfoResponse {
    pub used_memory_bytes: usize,
    pub used_memory_mb: f64,
    pub flush_threshold_bytes: usize,
    pub flush_threshold_mb: f64,
    pub total_entries: usize,
    /// Global flushes performed since startup
    pub flushes: u64,
}

impl From<MemoryInfo> for MemoryInfoResponse {
    fn from(info: MemoryInfo) -> Self {
        Self {
            used_memory_bytes: info.used_bytes,
            used_memory_mb: bytes_to_mb(info.used_bytes),
            flush_threshold_bytes: info.threshold_bytes,
            flush_threshold_mb: bytes_to_mb(info.threshold_bytes),
            total_entries: info.total_entries,
            flushes: info.flushes,
        }
    }
}

fn bytes_to_mb(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of global flushes
    pub flushes: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<&CacheStats> for StatsResponse {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            flushes: stats.flushes,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Which service answered
    pub service: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
