//! Cache Module
//!
//! The volatile tier: an in-memory JSON store with a global memory flush,
//! the `CacheBackend` seam the gateway talks to, and its two
//! implementations (in-process and HTTP).

mod backend;
mod client;
mod entry;
pub mod keys;
mod stats;
mod store;


// Re-export public types
pub use backend::{CacheBackend, SharedCache};
pub use client::HttpCacheClient;
pub use entry::{CacheEntry, ENTRY_OVERHEAD_BYTES};
pub use stats::{CacheStats, MemoryInfo};
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Usage at or above which the next write clears the whole cache (75 MiB).
pub const FLUSH_THRESHOLD_BYTES: usize = 75 * 1024 * 1024;
