//! User gateway - cache-aside reads and write-through creates in front of
//! the record and cache servers.

use std::sync::Arc;

use tracing::info;

use user_tier::api::gateway_router;
use user_tier::cache::HttpCacheClient;
use user_tier::record::HttpRecordStore;
use user_tier::server::{init_tracing, serve};
use user_tier::{Coordinator, GatewayConfig, GatewayState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("Starting user gateway");

    let config = GatewayConfig::from_env();
    info!(
        "Configuration loaded: port={}, database_service_url={}, cache_service_url={}, timeout={}s",
        config.server_port,
        config.database_service_url,
        config.cache_service_url,
        config.request_timeout_secs
    );

    let records = HttpRecordStore::new(&config.database_service_url, config.request_timeout())?;
    let cache = HttpCacheClient::new(&config.cache_service_url, config.request_timeout())?;
    let coordinator = Coordinator::new(Arc::new(records), Arc::new(cache));

    let app = gateway_router(GatewayState::new(coordinator));
    serve(app, config.server_port).await
}
