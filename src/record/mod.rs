//! Record Store Module
//!
//! The authoritative tier. [`RecordStore`] is the contract the gateway
//! depends on; [`SqliteRecordStore`] persists records for `record-server`,
//! and [`HttpRecordStore`] is the gateway's client for that server.

mod client;
mod sqlite;

use async_trait::async_trait;

use crate::error::RecordResult;
use crate::models::Record;

pub use client::HttpRecordStore;
pub use sqlite::SqliteRecordStore;

/// Create and look up records.
///
/// Lookups distinguish [`crate::error::RecordError::NotFound`] from every
/// other failure.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists a new record and returns it with its assigned id.
    async fn create(&self, name: &str) -> RecordResult<Record>;

    async fn get_by_id(&self, id: i64) -> RecordResult<Record>;

    /// Returns the lowest-id record carrying `name`.
    async fn get_by_name(&self, name: &str) -> RecordResult<Record>;
}
