//! Gateway Module
//!
//! Request orchestration across the cache tier and the record store.

mod coordinator;

pub use coordinator::Coordinator;
