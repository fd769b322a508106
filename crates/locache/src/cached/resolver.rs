//! Cached resolver decorator.
//!
//! Wraps a `Resolver` implementation with the cache-aside pattern.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use locache_core::cache::{
    deserialize_lookup, lookup_key, prefix_pattern, serialize_lookup, Cache, CacheError,
};
use locache_core::resolver::{ConfigurationError, Locator, Resolver, Result};

/// Errors that can occur when building a [`CachedResolver`] from a config.
///
/// Unifies the two construction failure classes: a bad decorator
/// configuration, and a cache store backend that is unavailable in the
/// current environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Cached resolver decorator.
///
/// Implements the cache-aside pattern over an arbitrary resolver: each
/// `resolve` checks the store first under the key `prefix + name`; on a miss
/// the wrapped resolver runs and its answer is written back, so idempotent
/// names hit the real resolver at most once per cache entry. An absent
/// resource is cached like any other answer and short-circuits later calls
/// just the same.
///
/// Cache store failures during `resolve` are fail-open: a read error counts
/// as a miss and a write error is logged and dropped, so a degraded store
/// degrades to uncached resolution rather than an outage.
///
/// No lock is taken around the miss path. Two concurrent callers resolving
/// the same uncached name may both invoke the wrapped resolver and both
/// write the entry; the store converges on one consistent value. That race
/// is an accepted trade-off, not a bug.
///
/// Every capability other than `resolve` is forwarded verbatim to the
/// wrapped resolver, and the wrapped resolver itself stays reachable through
/// [`CachedResolver::resolver`].
///
/// # Type Parameters
///
/// * `R` - The underlying resolver implementation
/// * `C` - The cache store implementation
pub struct CachedResolver<R, C>
where
    R: Resolver,
    C: Cache,
{
    resolver: Arc<R>,
    cache: Arc<C>,
    prefix: String,
    ttl: Option<Duration>,
}

impl<R, C> CachedResolver<R, C>
where
    R: Resolver,
    C: Cache,
{
    /// Creates a new cached resolver.
    ///
    /// # Arguments
    ///
    /// * `resolver` - The underlying resolver to cache
    /// * `cache` - The cache store implementation
    /// * `prefix` - Key namespace; prepended to every name so independent
    ///   resolvers can share one store
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptyPrefix`] when `prefix` is empty -
    /// an unprefixed decorator would silently share entries with every other
    /// unprefixed decorator on the same store.
    pub fn new(
        resolver: Arc<R>,
        cache: Arc<C>,
        prefix: &str,
    ) -> std::result::Result<Self, ConfigurationError> {
        if prefix.is_empty() {
            return Err(ConfigurationError::EmptyPrefix);
        }
        Ok(Self {
            resolver,
            cache,
            prefix: prefix.to_string(),
            ttl: None,
        })
    }

    /// Sets a time-to-live for cached lookups.
    ///
    /// Without a TTL, entries live until the store evicts them or they are
    /// explicitly invalidated.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// The wrapped resolver, for callers that need its other capabilities
    /// directly.
    pub fn resolver(&self) -> &Arc<R> {
        &self.resolver
    }

    /// The cache store this decorator writes through.
    pub fn cache(&self) -> &Arc<C> {
        &self.cache
    }

    /// The key prefix this decorator namespaces its entries under.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Drops the cached lookup for one name, forcing the next `resolve` to
    /// re-run the wrapped resolver.
    pub async fn invalidate(&self, name: &str) -> locache_core::cache::Result<()> {
        let key = lookup_key(&self.prefix, name);
        self.cache.delete(&key).await?;
        tracing::debug!(name, key = %key, "Cached lookup invalidated");
        Ok(())
    }

    /// Drops every cached lookup under this decorator's prefix. Entries
    /// belonging to other prefixes on the same store are untouched.
    pub async fn invalidate_all(&self) -> locache_core::cache::Result<()> {
        let pattern = prefix_pattern(&self.prefix);
        self.cache.delete_pattern(&pattern).await?;
        tracing::debug!(prefix = %self.prefix, "All cached lookups invalidated");
        Ok(())
    }
}

#[async_trait]
impl<R, C> Resolver for CachedResolver<R, C>
where
    R: Resolver + 'static,
    C: Cache + 'static,
{
    async fn resolve(&self, name: &str) -> Result<Option<Locator>> {
        let key = lookup_key(&self.prefix, name);

        // Check cache first. A cached absence is a hit like any other.
        match self.cache.get(&key).await {
            Ok(Some(bytes)) => match deserialize_lookup(&bytes) {
                Ok(cached) => {
                    tracing::trace!(name, key = %key, "Cache hit for lookup");
                    return Ok(cached);
                }
                Err(err) => {
                    // Corrupt entry - treat as a miss and overwrite below
                    tracing::warn!(name, key = %key, error = %err, "Cached lookup undecodable");
                }
            },
            Ok(None) => {
                tracing::trace!(name, key = %key, "Cache miss for lookup");
            }
            Err(err) => {
                // Fail open: a broken store means uncached resolution, not
                // a failed one
                tracing::warn!(name, key = %key, error = %err, "Cache read failed");
            }
        }

        // Cache miss - run the wrapped resolver. Its errors propagate
        // unchanged and are not cached.
        let lookup = self.resolver.resolve(name).await?;

        // Populate unconditionally: absence is written back too, so a failed
        // search is not repeated either.
        match serialize_lookup(&lookup) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&key, &bytes, self.ttl).await {
                    tracing::warn!(name, key = %key, error = %err, "Failed to cache lookup");
                }
            }
            Err(err) => {
                tracing::warn!(name, key = %key, error = %err, "Failed to encode lookup");
            }
        }

        Ok(lookup)
    }

    async fn known_names(&self) -> Result<Vec<String>> {
        self.resolver.known_names().await
    }
}
