//! Record server handlers
//!
//! HTTP request handlers for the record store's `/users` endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{RecordError, RecordResult};
use crate::models::{CreateUserRequest, HealthResponse, Record};
use crate::record::RecordStore;

/// State shared across record server handlers.
#[derive(Clone)]
pub struct RecordState {
    pub store: Arc<dyn RecordStore>,
}

impl RecordState {
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Handler for POST /users
pub async fn create_handler(
    State(state): State<RecordState>,
    Json(req): Json<CreateUserRequest>,
) -> RecordResult<Json<Record>> {
    if let Some(error_msg) = req.validate() {
        return Err(RecordError::InvalidRequest(error_msg));
    }

    let record = state.store.create(&req.name).await?;
    Ok(Json(record))
}

/// Handler for GET /users/id/:id
pub async fn get_by_id_handler(
    State(state): State<RecordState>,
    Path(id): Path<i64>,
) -> RecordResult<Json<Record>> {
    Ok(Json(state.store.get_by_id(id).await?))
}

/// Handler for GET /users/name/:name
pub async fn get_by_name_handler(
    State(state): State<RecordState>,
    Path(name): Path<String>,
) -> RecordResult<Json<Record>> {
    Ok(Json(state.store.get_by_name(&name).await?))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("record-server"))
}
