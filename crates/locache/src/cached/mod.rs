//! Cached resolver decorator.
//!
//! This module provides the decorator that wraps a `Resolver` with
//! cache-aside behavior:
//!
//! - **Hits**: A stored answer — found or a cached absence — is returned
//!   without invoking the wrapped resolver.
//! - **Misses**: The wrapped resolver runs once and its answer is written
//!   back unconditionally, negative results included.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let resolver = Arc::new(MyProjectResolver::new("/src"));
//! let cache = Arc::new(RedisCache::new("redis://localhost:6379").await?);
//!
//! let cached = CachedResolver::new(resolver, cache, "app_")?;
//! ```

mod resolver;

pub use resolver::{BuildError, CachedResolver};
