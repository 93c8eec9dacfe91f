//! Domain record and request/response models
//!
//! This module defines the `Record` shared by all three services and the
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod record;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use record::Record;
pub use requests::CreateUserRequest;
pub use responses::{
    DeleteResponse, HealthResponse, MemoryInfoResponse, StatsResponse, StoreResponse,
};
