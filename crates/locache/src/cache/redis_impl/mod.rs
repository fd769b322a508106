//! Redis cache store backend.
//!
//! Provides the shared, process-external cache for multi-process
//! deployments. Uses a pooled connection manager; entries written by one
//! process are visible to every other process sharing the server.

mod cache;
mod error;

pub use cache::RedisCache;
