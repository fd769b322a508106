//! Redis cache implementation.
//!
//! Pattern deletion walks `SCAN MATCH`, which iterates the keyspace without
//! blocking the server the way `KEYS` would.
//!
//! # Non-Atomicity Safety
//!
//! `delete_pattern` involves multiple Redis commands (a SCAN walk followed by
//! a DEL). A concurrent writer can insert a matching key between the walk and
//! the delete, and that key will survive until the next invalidation. That is
//! acceptable for a memoization cache: the worst case is a stale entry, never
//! data corruption or a lost write.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use locache_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be
    /// established - the backend is unavailable in this environment.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let mut conn = self.conn.clone();

        // Collect first; the SCAN iterator borrows the connection.
        let mut keys_to_delete: Vec<String> = Vec::new();
        {
            let mut iter: redis::AsyncIter<String> =
                conn.scan_match(pattern).await.map_err(map_redis_error)?;
            while let Some(key) = iter.next_item().await {
                keys_to_delete.push(key);
            }
        }

        if !keys_to_delete.is_empty() {
            conn.del::<_, ()>(&keys_to_delete)
                .await
                .map_err(map_redis_error)?;
        }

        Ok(())
    }
}
