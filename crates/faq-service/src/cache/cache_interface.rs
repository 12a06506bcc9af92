//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use faq_core::FaqResult;
use shaku::Interface;
use std::future::Future;
use tracing::{debug, warn};

/// Raw cache backend operations.
///
/// Values are JSON strings so the trait stays dyn-compatible. Backends
/// report their own failures here; [`CacheExt`] is the layer that turns
/// those failures into misses and no-ops.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Gets a raw JSON value. `None` if the key is absent or expired.
    async fn get_raw(&self, key: &str) -> FaqResult<Option<String>>;

    /// Stores a raw JSON value with the backend's fixed TTL, replacing any
    /// existing entry.
    async fn set_raw(&self, key: &str, value: &str) -> FaqResult<()>;

    /// Deletes one key. Returns `true` if the key existed.
    async fn delete(&self, key: &str) -> FaqResult<bool>;

    /// Deletes every key matching a glob pattern.
    ///
    /// Returns the number of keys deleted.
    async fn delete_pattern(&self, pattern: &str) -> FaqResult<u64>;

    /// Drops every entry.
    async fn clear_all(&self) -> FaqResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Outcome of a typed cache read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    /// The key held a value that decoded as `T`.
    Hit(T),
    /// The key is absent or expired.
    Miss,
    /// The backend failed, is disabled, or held an undecodable payload.
    Unavailable,
}

impl<T> CacheLookup<T> {
    /// Returns the value on a hit.
    pub fn hit(self) -> Option<T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss | Self::Unavailable => None,
        }
    }

    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}

/// Best-effort typed operations over any [`CacheInterface`].
///
/// Nothing here returns a cache error: failures are logged and the caller
/// carries on as if the cache were empty.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Reads and decodes a value.
    async fn lookup<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> CacheLookup<T> {
        if !self.is_enabled() {
            return CacheLookup::Unavailable;
        }

        match self.get_raw(key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => {
                    debug!("Cache hit for key '{}'", key);
                    CacheLookup::Hit(value)
                }
                Err(e) => {
                    warn!("Discarding undecodable cache entry '{}': {}", key, e);
                    CacheLookup::Unavailable
                }
            },
            Ok(None) => {
                debug!("Cache miss for key '{}'", key);
                CacheLookup::Miss
            }
            Err(e) => {
                warn!("Cache read failed for key '{}': {}", key, e);
                CacheLookup::Unavailable
            }
        }
    }

    /// Encodes and stores a value.
    async fn store<T: serde::Serialize + Send + Sync>(&self, key: &str, value: &T) {
        if !self.is_enabled() {
            return;
        }

        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode cache entry '{}': {}", key, e);
                return;
            }
        };

        if let Err(e) = self.set_raw(key, &json).await {
            warn!("Cache write failed for key '{}': {}", key, e);
        }
    }

    /// Removes one entry.
    async fn evict(&self, key: &str) {
        if !self.is_enabled() {
            return;
        }
        if let Err(e) = self.delete(key).await {
            warn!("Cache delete failed for key '{}': {}", key, e);
        }
    }

    /// Removes every entry matching `pattern`. Returns how many went.
    async fn evict_pattern(&self, pattern: &str) -> u64 {
        if !self.is_enabled() {
            return 0;
        }
        match self.delete_pattern(pattern).await {
            Ok(deleted) => {
                debug!("Invalidated {} cache keys matching '{}'", deleted, pattern);
                deleted
            }
            Err(e) => {
                warn!("Cache invalidation failed for pattern '{}': {}", pattern, e);
                0
            }
        }
    }

    /// Drops the whole cache.
    async fn evict_all(&self) {
        if !self.is_enabled() {
            return;
        }
        if let Err(e) = self.clear_all().await {
            warn!("Cache flush failed: {}", e);
        }
    }

    /// Cache-aside read: returns the cached value on a hit, otherwise runs
    /// `factory`, caches its result and returns it.
    ///
    /// Errors from `factory` propagate and nothing is cached.
    async fn get_or_populate<T, F, Fut>(&self, key: &str, factory: F) -> FaqResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = FaqResult<T>> + Send,
    {
        if let CacheLookup::Hit(cached) = self.lookup::<T>(key).await {
            return Ok(cached);
        }

        let value = factory().await?;
        self.store(key, &value).await;

        Ok(value)
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
