use std::time::Duration;

use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tracing::debug;

use crate::route_cache::{CacheError, RouteCache};

impl From<redis::RedisError> for CacheError {
    fn from(error: redis::RedisError) -> Self {
        CacheError::Backend(error.to_string())
    }
}

/// Redis-backed route store. The connection manager reconnects on its own,
/// individual command failures still surface as `CacheError`.
pub struct RedisRouteCache {
    manager: ConnectionManager,
}

impl RedisRouteCache {
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;

        debug!("RedisRouteCache: connection manager ready");

        Ok(RedisRouteCache { manager })
    }
}

impl RouteCache for RedisRouteCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut connection = self.manager.clone();
        let value: Option<String> = connection.get(key).await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut connection = self.manager.clone();
        let seconds = ttl.as_secs().max(1);
        let _: () = connection.set_ex(key, value, seconds).await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut connection = self.manager.clone();
        let _: () = connection.del(key).await?;

        Ok(())
    }
}
