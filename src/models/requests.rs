//! Request DTOs
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Serialize};

/// Request body for user creation (POST /users), on both the gateway and
/// the record server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name of the new user
    pub name: String,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        None
    }
}
