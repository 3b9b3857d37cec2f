use std::time::Duration;

use crate::memory_cache::MemoryRouteCache;
use crate::redis_cache::RedisRouteCache;
use crate::route_cache::{CacheError, RouteCache};

/// Cache backend selected at startup.
pub enum RouteCacheBackend {
    Redis(RedisRouteCache),
    Memory(MemoryRouteCache),
}

impl RouteCache for RouteCacheBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match self {
            RouteCacheBackend::Redis(cache) => cache.get(key).await,
            RouteCacheBackend::Memory(cache) => cache.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        match self {
            RouteCacheBackend::Redis(cache) => cache.set(key, value, ttl).await,
            RouteCacheBackend::Memory(cache) => cache.set(key, value, ttl).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        match self {
            RouteCacheBackend::Redis(cache) => cache.delete(key).await,
            RouteCacheBackend::Memory(cache) => cache.delete(key).await,
        }
    }
}
