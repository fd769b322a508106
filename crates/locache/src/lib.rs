//! Cache-aside resolution for name-to-locator lookups.
//!
//! The central piece is [`CachedResolver`], a decorator that wraps any
//! [`Resolver`] — a capability mapping a symbolic name (say, a class name) to
//! a resource [`Locator`] (say, a file path) — and memoizes every answer in a
//! shared cache store, so each name runs through the potentially expensive
//! underlying resolution at most once per cache entry. Negative answers are
//! cached too: a name that resolved to nothing will not be re-searched until
//! its entry is invalidated.
//!
//! # Cache Store Backends
//!
//! Selected at compile time via feature flags (mutually exclusive):
//!
//! - `memory` (default): in-process LRU store for single-instance use.
//! - `redis`: shared, persistent, process-external store.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use locache::cache::MemoryCache;
//! use locache::resolver::StaticResolver;
//! use locache::{CachedResolver, Locator, Resolver};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Arc::new(StaticResolver::new().with_entry("Foo", "/src/Foo.inc"));
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let cached = CachedResolver::new(resolver, cache, "app_")?;
//!
//! assert_eq!(cached.resolve("Foo").await?, Some(Locator::new("/src/Foo.inc")));
//! assert_eq!(cached.resolve("Bar").await?, None); // absence, now cached as well
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod cache;
pub mod cached;
pub mod config;
#[cfg(feature = "static-resolver")]
pub mod resolver;

pub use cached::{BuildError, CachedResolver};
pub use config::Config;
pub use locache_core::cache::{Cache, CacheError};
pub use locache_core::resolver::{ConfigurationError, Locator, ResolveError, Resolver};

/// Builds a [`CachedResolver`] backed by an in-process [`cache::MemoryCache`]
/// sized and namespaced from `config`.
#[cfg(feature = "memory")]
pub fn cached_in_memory<R>(
    resolver: Arc<R>,
    config: &Config,
) -> Result<CachedResolver<R, cache::MemoryCache>, BuildError>
where
    R: Resolver + 'static,
{
    let store = cache::MemoryCache::new(config.cache_max_entries);
    build(resolver, Arc::new(store), config)
}

/// Builds a [`CachedResolver`] backed by the shared Redis store at
/// `config.redis_url`.
///
/// Fails with [`BuildError::Cache`] when the Redis backend is unreachable —
/// the component cannot be created without its store.
#[cfg(feature = "redis")]
pub async fn cached_with_redis<R>(
    resolver: Arc<R>,
    config: &Config,
) -> Result<CachedResolver<R, cache::RedisCache>, BuildError>
where
    R: Resolver + 'static,
{
    let store = cache::RedisCache::new(&config.redis_url).await?;
    build(resolver, Arc::new(store), config)
}

fn build<R, C>(
    resolver: Arc<R>,
    store: Arc<C>,
    config: &Config,
) -> Result<CachedResolver<R, C>, BuildError>
where
    R: Resolver + 'static,
    C: Cache + 'static,
{
    let mut cached = CachedResolver::new(resolver, store, &config.key_prefix)?;
    if let Some(ttl) = config.cache_ttl() {
        cached = cached.with_ttl(ttl);
    }
    Ok(cached)
}
