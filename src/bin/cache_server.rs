//! Cache server - volatile JSON store with a 75 MiB global flush.

use tracing::info;

use user_tier::api::cache_router;
use user_tier::cache::{CacheStore, FLUSH_THRESHOLD_BYTES};
use user_tier::server::{init_tracing, serve};
use user_tier::{CacheConfig, CacheState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("Starting cache server");

    let config = CacheConfig::from_env();
    info!(
        "Configuration loaded: port={}, flush_threshold={} bytes",
        config.server_port, FLUSH_THRESHOLD_BYTES
    );

    let state = CacheState::new(CacheStore::new());
    serve(cache_router(state), config.server_port).await
}
