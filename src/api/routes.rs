//! API Routes
//!
//! Builds the Axum router of each service.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{cache, gateway, records};
use super::{CacheState, GatewayState, RecordState};

/// Router of the cache server.
///
/// # Endpoints
/// - `GET /cache/memory` - Memory usage and flush threshold
/// - `GET /cache/:key` - Retrieve a stored document
/// - `POST /cache/:key` - Store a JSON object (may trigger a global flush)
/// - `DELETE /cache/:key` - Delete a key
/// - `GET /stats` - Hit/miss/flush counters
/// - `GET /health` - Health check endpoint
///
/// `/cache/memory` is a static route and wins over `/cache/:key`, so the
/// key `memory` is not addressable over HTTP.
pub fn cache_router(state: CacheState) -> Router {
    let router = Router::new()
        .route("/cache/memory", get(cache::memory_handler))
        .route(
            "/cache/:key",
            get(cache::get_handler)
                .post(cache::set_handler)
                .delete(cache::delete_handler),
        )
        .route("/stats", get(cache::stats_handler))
        .route("/health", get(cache::health_handler))
        .with_state(state);

    with_middleware(router)
}

/// Router of the record server.
///
/// # Endpoints
/// - `POST /users` - Create a user
/// - `GET /users/id/:id` - Look up by id
/// - `GET /users/name/:name` - Look up by name
/// - `GET /health` - Health check endpoint
pub fn record_router(state: RecordState) -> Router {
    let router = Router::new()
        .route("/users", post(records::create_handler))
        .route("/users/id/:id", get(records::get_by_id_handler))
        .route("/users/name/:name", get(records::get_by_name_handler))
        .route("/health", get(records::health_handler))
        .with_state(state);

    with_middleware(router)
}

/// Router of the gateway. Same `/users` shape as the record server.
pub fn gateway_router(state: GatewayState) -> Router {
    let router = Router::new()
        .route("/users", post(gateway::create_handler))
        .route("/users/id/:id", get(gateway::get_by_id_handler))
        .route("/users/name/:name", get(gateway::get_by_name_handler))
        .route("/health", get(gateway::health_handler))
        .with_state(state);

    with_middleware(router)
}

/// CORS (any origin) and request tracing.
fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).layer(TraceLayer::new_for_http())
}
