//! Cache backend seam
//!
//! The gateway reaches the cache tier through [`CacheBackend`]. In
//! deployment that is [`super::HttpCacheClient`]; [`SharedCache`] serves the
//! same contract from an in-process [`CacheStore`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{CacheStore, MemoryInfo};
use crate::error::Result;

/// get/set/delete by opaque string key, plus the memory report.
///
/// A miss is `Err(CacheError::NotFound)`; any other error means the cache
/// could not answer.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Value>;

    /// Stores `value`. Runs the cache's eviction check first.
    async fn set(&self, key: &str, value: &Value) -> Result<()>;

    async fn delete(&self, key: &str) -> Result<()>;

    async fn memory_info(&self) -> Result<MemoryInfo>;
}

/// A [`CacheStore`] shared across tasks.
///
/// Every mutating call holds the write guard for its whole duration, so the
/// store's check, flush, and insert cannot interleave with another writer.
#[derive(Debug, Clone, Default)]
pub struct SharedCache {
    inner: Arc<RwLock<CacheStore>>,
}

impl SharedCache {
    pub fn new(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// The underlying lock, for callers that need several operations under
    /// one guard.
    pub fn store(&self) -> &Arc<RwLock<CacheStore>> {
        &self.inner
    }
}

#[async_trait]
impl CacheBackend for SharedCache {
    async fn get(&self, key: &str) -> Result<Value> {
        // write guard: get updates hit/miss stats
        self.inner.write().await.get(key)
    }

    async fn set(&self, key: &str, value: &Value) -> Result<()> {
        self.inner.write().await.set(key.to_string(), value)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.inner.write().await.delete(key)
    }

    async fn memory_info(&self) -> Result<MemoryInfo> {
        Ok(self.inner.read().await.memory_info())
    }
}
