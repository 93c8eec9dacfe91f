//! Test doubles for the coordinator's two downstreams.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use user_tier::cache::{CacheBackend, MemoryInfo, SharedCache};
use user_tier::error::{CacheError, RecordError, RecordResult, Result};
use user_tier::record::RecordStore;
use user_tier::Record;

/// In-memory record store that counts every call and can be switched to
/// behave as unreachable.
pub struct FakeRecordStore {
    records: Mutex<Vec<Record>>,
    next_id: AtomicI64,
    unreachable: AtomicBool,
    pub creates: AtomicUsize,
    pub id_lookups: AtomicUsize,
    pub name_lookups: AtomicUsize,
}

impl FakeRecordStore {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Next created record gets `first_id`.
    pub fn starting_at(first_id: i64) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(first_id),
            unreachable: AtomicBool::new(false),
            creates: AtomicUsize::new(0),
            id_lookups: AtomicUsize::new(0),
            name_lookups: AtomicUsize::new(0),
        }
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn id_lookups(&self) -> usize {
        self.id_lookups.load(Ordering::SeqCst)
    }

    pub fn name_lookups(&self) -> usize {
        self.name_lookups.load(Ordering::SeqCst)
    }

    fn check_reachable(&self) -> RecordResult<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(RecordError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FakeRecordStore {
    async fn create(&self, name: &str) -> RecordResult<Record> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        let record = Record::new(self.next_id.fetch_add(1, Ordering::SeqCst), name);
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: i64) -> RecordResult<Record> {
        self.id_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| RecordError::NotFound(format!("id {}", id)))
    }

    async fn get_by_name(&self, name: &str) -> RecordResult<Record> {
        self.name_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| RecordError::NotFound(format!("name '{}'", name)))
    }
}

/// A cache that never answers.
#[derive(Default)]
pub struct UnreachableCache {
    pub calls: AtomicUsize,
}

impl UnreachableCache {
    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CacheError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl CacheBackend for UnreachableCache {
    async fn get(&self, _key: &str) -> Result<Value> {
        self.fail()
    }

    async fn set(&self, _key: &str, _value: &Value) -> Result<()> {
        self.fail()
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        self.fail()
    }

    async fn memory_info(&self) -> Result<MemoryInfo> {
        self.fail()
    }
}

/// A working cache that refuses writes to keys starting with a prefix.
pub struct RejectingCache {
    pub inner: SharedCache,
    pub reject_prefix: &'static str,
}

#[async_trait]
impl CacheBackend for RejectingCache {
    async fn get(&self, key: &str) -> Result<Value> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &Value) -> Result<()> {
        if key.starts_with(self.reject_prefix) {
            return Err(CacheError::Unavailable(format!("write to '{}' dropped", key)));
        }
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.inner.delete(key).await
    }

    async fn memory_info(&self) -> Result<MemoryInfo> {
        self.inner.memory_info().await
    }
}
