//! API Module
//!
//! HTTP handlers and routing for the three services.
//!
//! # Services
//! - cache server: `/cache/:key`, `/cache/memory`, `/stats`
//! - record server: `/users`, `/users/id/:id`, `/users/name/:name`
//! - gateway: the same `/users` surface, cache-aside in front of the record server
//!
//! All three also serve `GET /health`.

pub mod cache;
pub mod gateway;
pub mod records;
pub mod routes;

pub use cache::CacheState;
pub use gateway::GatewayState;
pub use records::RecordState;
pub use routes::{cache_router, gateway_router, record_router};
