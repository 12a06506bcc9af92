//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use faq_core::{FaqError, FaqResult};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default TTL for cached items (1 hour).
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Redis-based cache service.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool. `None` when Redis is switched off.
    pool: Option<Arc<Pool>>,
    /// Expiry applied to every entry.
    #[shaku(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>, ttl: Duration) -> Self {
        Self {
            pool: Some(pool),
            ttl,
        }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            ttl: DEFAULT_TTL,
        }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> FaqResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                FaqError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(FaqError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> FaqResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            FaqError::Cache(format!("Failed to get key '{}': {}", key, e))
        })?;

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str) -> FaqResult<()> {
        let mut conn = self.get_conn().await?;
        let ttl_secs = self.ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
            FaqError::Cache(format!("Failed to set key '{}': {}", key, e))
        })?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> FaqResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.del(key).await.map_err(|e| {
            FaqError::Cache(format!("Failed to delete key '{}': {}", key, e))
        })?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn delete_pattern(&self, pattern: &str) -> FaqResult<u64> {
        let mut conn = self.get_conn().await?;

        // TODO: switch to SCAN once the keyspace is shared with other services.
        let keys: Vec<String> = deadpool_redis::redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut conn)
            .await
            .map_err(|e| FaqError::Cache(format!("Failed to list keys: {}", e)))?;

        if keys.is_empty() {
            return Ok(0);
        }

        let deleted: u64 = conn.del(&keys).await.map_err(|e| {
            FaqError::Cache(format!("Failed to delete keys: {}", e))
        })?;

        debug!("Deleted {} keys matching pattern '{}'", deleted, pattern);
        Ok(deleted)
    }

    async fn clear_all(&self) -> FaqResult<()> {
        let mut conn = self.get_conn().await?;
        let _: () = deadpool_redis::redis::cmd("FLUSHALL")
            .query_async(&mut conn)
            .await
            .map_err(|e| FaqError::Cache(format!("Failed to flush cache: {}", e)))?;

        debug!("Flushed cache");
        Ok(())
    }
}
