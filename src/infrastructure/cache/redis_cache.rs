//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use std::time::Duration;
use tracing::{debug, info};

/// Redis cache implementation for fast redirect lookups.
///
/// Uses `ConnectionManager` for connection reuse and reconnection. Transport
/// errors are returned to the caller: on the synchronous redirect path they
/// become internal errors, on the detached backfill path they are logged.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {e}"))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "url:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, code: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| CacheError::OperationError(format!("Redis GET failed for {code}: {e}")))?;

        match &value {
            Some(url) => debug!("Cache HIT: {} -> {}", code, url),
            None => debug!("Cache MISS: {}", code),
        }

        Ok(value)
    }

    async fn set_with_expiry(
        &self,
        code: &str,
        destination: &str,
        ttl: Duration,
    ) -> CacheResult<()> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        conn.set_ex::<_, _, ()>(&key, destination, ttl.as_secs())
            .await
            .map_err(|e| CacheError::OperationError(format!("Redis SET failed for {code}: {e}")))?;

        debug!("Cache SET: {} -> {} (TTL: {}s)", code, destination, ttl.as_secs());

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
