use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic cache store operations.
///
/// The store is a shared, potentially process-external key-value service.
/// Persistence, eviction, and distribution guarantees are entirely the
/// store's concern; consumers only assume read-after-write visibility within
/// the calling process.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    ///
    /// `Ok(None)` means the key is not in the store — a miss. A stored
    /// serialized absence is returned as `Ok(Some(bytes))` like any other
    /// value.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Deletes all values matching a glob pattern (e.g. `"app_*"`).
    async fn delete_pattern(&self, pattern: &str) -> Result<()>;
}
