//! Caching infrastructure for the service layer.
//!
//! A cache abstraction with Redis and in-memory backends. The cache only
//! ever holds derived projections; the store stays authoritative.

mod cache_interface;
pub mod cache_keys;
mod glob;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface, CacheLookup};
pub use glob::glob_match;
pub use memory_cache::{InMemoryCacheService, InMemoryCacheServiceParameters};
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters, DEFAULT_TTL};
