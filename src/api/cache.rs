//! Cache server handlers
//!
//! HTTP request handlers for the `/cache/...` endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::{CacheBackend, CacheStore, SharedCache};
use crate::error::{CacheError, Result};
use crate::models::{
    DeleteResponse, HealthResponse, MemoryInfoResponse, StatsResponse, StoreResponse,
};

/// State shared across cache server handlers.
#[derive(Clone, Default)]
pub struct CacheState {
    /// The same shared store the in-process backend uses
    pub cache: SharedCache,
}

impl CacheState {
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: SharedCache::new(cache),
        }
    }
}

/// Handler for GET /cache/:key
///
/// Returns the stored JSON document itself.
pub async fn get_handler(
    State(state): State<CacheState>,
    Path(key): Path<String>,
) -> Result<Json<Value>> {
    let value = state.cache.get(&key).await?;

    Ok(Json(value))
}

/// Handler for POST /cache/:key
///
/// Stores a JSON object. The memory check and the write happen under one
/// write guard.
pub async fn set_handler(
    State(state): State<CacheState>,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<StoreResponse>> {
    if !value.is_object() {
        return Err(CacheError::InvalidRequest(
            "Value must be a JSON object".to_string(),
        ));
    }

    state.cache.set(&key, &value).await?;

    Ok(Json(StoreResponse::new(key)))
}

/// Handler for DELETE /cache/:key
pub async fn delete_handler(
    State(state): State<CacheState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.cache.delete(&key).await?;

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for GET /cache/memory
pub async fn memory_handler(
    State(state): State<CacheState>,
) -> Result<Json<MemoryInfoResponse>> {
    let info = state.cache.memory_info().await?;
    Ok(Json(info.into()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<CacheState>) -> Json<StatsResponse> {
    let stats = state.cache.store().read().await.stats();
    Json(StatsResponse::from(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("cache-server"))
}
