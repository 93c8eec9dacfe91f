//! user-tier - user records behind a caching gateway
//!
//! Three services share this library:
//! - a record store of record (SQLite),
//! - a memory-bounded cache that flushes everything once it reaches 75 MiB,
//! - a gateway that reads cache-aside and writes through.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod record;
pub mod server;
mod transport;

pub use api::{CacheState, GatewayState, RecordState};
pub use config::{CacheConfig, GatewayConfig, RecordConfig};
pub use gateway::Coordinator;
pub use models::Record;
