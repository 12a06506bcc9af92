//! Process-local cache backend.

use super::{glob_match, CacheInterface, DEFAULT_TTL};
use async_trait::async_trait;
use faq_core::FaqResult;
use parking_lot::Mutex;
use shaku::Component;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// In-memory cache with per-entry expiry.
///
/// Expired entries are dropped lazily, on the next access to their key or
/// the next pattern scan.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct InMemoryCacheService {
    entries: Mutex<HashMap<String, (String, Instant)>>,
    #[shaku(default = DEFAULT_TTL)]
    ttl: Duration,
}

impl InMemoryCacheService {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .values()
            .filter(|(_, expires)| *expires > now)
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCacheService {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[async_trait]
impl CacheInterface for InMemoryCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> FaqResult<Option<String>> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some((value, expires)) if *expires > Instant::now() => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_raw(&self, key: &str, value: &str) -> FaqResult<()> {
        let expires = Instant::now() + self.ttl;
        self.entries
            .lock()
            .insert(key.to_string(), (value.to_string(), expires));
        Ok(())
    }

    async fn delete(&self, key: &str) -> FaqResult<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .lock()
            .remove(key)
            .is_some_and(|(_, expires)| expires > now))
    }

    async fn delete_pattern(&self, pattern: &str) -> FaqResult<u64> {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let before = entries.len();

        let mut deleted = 0;
        entries.retain(|key, (_, expires)| {
            if *expires <= now {
                return false;
            }
            if glob_match(pattern, key) {
                deleted += 1;
                return false;
            }
            true
        });

        debug!(
            "Deleted {} keys matching pattern '{}' ({} expired dropped)",
            deleted,
            pattern,
            before - entries.len() - deleted
        );
        Ok(deleted as u64)
    }

    async fn clear_all(&self) -> FaqResult<()> {
        self.entries.lock().clear();
        Ok(())
    }
}
