use std::{env, time::Duration};

/// Decorator configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key prefix namespacing this resolver's entries (default: "locache_")
    pub key_prefix: String,
    /// Cache TTL in seconds; 0 means entries never expire (default: 0)
    pub cache_ttl_seconds: u64,
    /// Maximum number of in-memory cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    pub cache_max_entries: usize,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_KEY_PREFIX` - Key prefix (default: "locache_")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds, 0 = no expiry (default: 0)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory entries (default: 10,000)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        Self {
            key_prefix: env::var("CACHE_KEY_PREFIX").unwrap_or_else(|_| "locache_".to_string()),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration; `None` means no expiry.
    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl_seconds > 0).then(|| Duration::from_secs(self.cache_ttl_seconds))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
