//! In-memory cache store backend.
//!
//! Provides a thread-safe cache with TTL support and LRU bounding for
//! single-process deployments and tests.

mod cache;

pub use cache::MemoryCache;
