//! Record server - durable user records in SQLite.

use tracing::info;

use user_tier::api::record_router;
use user_tier::record::SqliteRecordStore;
use user_tier::server::{init_tracing, serve};
use user_tier::{RecordConfig, RecordState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("Starting record server");

    let config = RecordConfig::from_env();
    info!(
        "Configuration loaded: port={}, database_path={}",
        config.server_port, config.database_path
    );

    let store = SqliteRecordStore::open(&config.database_path).await?;
    serve(record_router(RecordState::new(store)), config.server_port).await
}
