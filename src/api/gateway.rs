//! Gateway handlers
//!
//! The public `/users` surface. Each handler delegates to the
//! [`Coordinator`], which owns all cache and failure policy.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::GatewayResult;
use crate::gateway::Coordinator;
use crate::models::{CreateUserRequest, HealthResponse, Record};

/// State shared across gateway handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub coordinator: Coordinator,
}

impl GatewayState {
    pub fn new(coordinator: Coordinator) -> Self {
        Self { coordinator }
    }
}

/// Handler for POST /users
pub async fn create_handler(
    State(state): State<GatewayState>,
    Json(req): Json<CreateUserRequest>,
) -> GatewayResult<Json<Record>> {
    Ok(Json(state.coordinator.create(&req.name).await?))
}

/// Handler for GET /users/id/:id
pub async fn get_by_id_handler(
    State(state): State<GatewayState>,
    Path(id): Path<i64>,
) -> GatewayResult<Json<Record>> {
    Ok(Json(state.coordinator.get_by_id(id).await?))
}

/// Handler for GET /users/name/:name
pub async fn get_by_name_handler(
    State(state): State<GatewayState>,
    Path(name): Path<String>,
) -> GatewayResult<Json<Record>> {
    Ok(Json(state.coordinator.get_by_name(&name).await?))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("user-gateway"))
}
