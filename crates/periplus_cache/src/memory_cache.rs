use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::route_cache::{CacheError, RouteCache};

/// In-process store used when no external cache backend is configured.
/// Expired entries are dropped lazily on read.
#[derive(Default)]
pub struct MemoryRouteCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryRouteCache {
    pub fn new() -> Self {
        MemoryRouteCache::default()
    }
}

impl RouteCache for MemoryRouteCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock();

        match entries.get(key) {
            Some((value, expires_at)) if Instant::now() < *expires_at => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let expires_at = Instant::now() + ttl;

        self.entries
            .lock()
            .insert(key.to_string(), (value.to_string(), expires_at));

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().remove(key);

        Ok(())
    }
}
