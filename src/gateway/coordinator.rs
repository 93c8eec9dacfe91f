//! Cache-aside reads and write-through creates.
//!
//! # Failure policy
//! - Record store failures always reach the caller; not-found stays
//!   distinguishable from transport failure.
//! - Cache failures never do. A cache that errors on a read is treated as
//!   a miss, and a failed populate is logged and dropped.
//! - Nothing is retried, and misses are never cached.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::keys::{name_key, user_key};
use crate::cache::CacheBackend;
use crate::error::{CacheError, GatewayError, GatewayResult, RecordResult};
use crate::models::{CreateUserRequest, Record};
use crate::record::RecordStore;

/// Composes a [`RecordStore`] and a [`CacheBackend`].
///
/// Holds no mutable state of its own; cloning is cheap and clones share
/// both downstreams.
#[derive(Clone)]
pub struct Coordinator {
    records: Arc<dyn RecordStore>,
    cache: Arc<dyn CacheBackend>,
}

impl Coordinator {
    pub fn new(records: Arc<dyn RecordStore>, cache: Arc<dyn CacheBackend>) -> Self {
        Self { records, cache }
    }

    // == Create ==
    /// Creates the record in the record store, then populates both cache
    /// keys.
    ///
    /// The store write completes before any cache write starts. The two
    /// populates run concurrently and either may fail independently; the
    /// record is returned regardless.
    pub async fn create(&self, name: &str) -> GatewayResult<Record> {
        if let Some(message) = CreateUserRequest::new(name).validate() {
            return Err(GatewayError::InvalidRequest(message));
        }

        let record = self.records.create(name).await?;

        let by_id = user_key(record.id);
        let by_name = name_key(&record.name);
        tokio::join!(
            self.populate(&by_id, &record),
            self.populate(&by_name, &record)
        );

        Ok(record)
    }

    // == Reads ==
    pub async fn get_by_id(&self, id: i64) -> GatewayResult<Record> {
        self.read_through(user_key(id), || self.records.get_by_id(id))
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> GatewayResult<Record> {
        self.read_through(name_key(name), || self.records.get_by_name(name))
            .await
    }

    /// Cache first; on a miss or any cache failure, `fetch` from the record
    /// store and populate `key` best-effort.
    ///
    /// A cached value is returned as-is, without checking it against the
    /// record store.
    async fn read_through<F, Fut>(&self, key: String, fetch: F) -> GatewayResult<Record>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RecordResult<Record>>,
    {
        if let Some(record) = self.cached(&key).await {
            return Ok(record);
        }

        let record = fetch().await?;
        self.populate(&key, &record).await;
        Ok(record)
    }

    async fn cached(&self, key: &str) -> Option<Record> {
        match self.cache.get(key).await {
            Ok(value) => match serde_json::from_value::<Record>(value) {
                Ok(record) => {
                    debug!("Cache hit for '{}'", key);
                    Some(record)
                }
                Err(e) => {
                    warn!("Ignoring undecodable cache entry '{}': {}", key, e);
                    None
                }
            },
            Err(CacheError::NotFound(_)) => {
                debug!("Cache miss for '{}'", key);
                None
            }
            Err(e) => {
                warn!("Cache read for '{}' failed, using record store: {}", key, e);
                None
            }
        }
    }

    /// Best-effort cache write. The outcome is logged and discarded.
    async fn populate(&self, key: &str, record: &Record) {
        let value = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not encode record for '{}': {}", key, e);
                return;
            }
        };

        match self.cache.set(key, &value).await {
            Ok(()) => debug!("Cached '{}'", key),
            Err(e) => warn!("Cache write for '{}' failed, ignoring: {}", key, e),
        }
    }
}
