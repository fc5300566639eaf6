//! Cache service trait and error types.

use crate::error::AppError;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        AppError::internal(e.to_string())
    }
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching redirect code to destination URL mappings.
///
/// Entries are disposable: their absence must never cause incorrect
/// behavior, only an extra store read. Destinations are immutable, so no
/// invalidation operation exists and concurrent writers for the same code
/// always store the same value.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the destination URL for a redirect code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] on transport failure. On the redirect path this
    /// surfaces to the caller as an internal error.
    async fn get(&self, code: &str) -> CacheResult<Option<String>>;

    /// Stores a destination URL under a redirect code with a time-to-live.
    ///
    /// The entry expires `ttl` after this write; subsequent reads do not
    /// refresh it.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] on transport failure. Callers on the redirect
    /// path invoke this from detached tasks and only log the error.
    async fn set_with_expiry(&self, code: &str, destination: &str, ttl: Duration)
        -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
