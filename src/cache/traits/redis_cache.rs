use std::time::Duration;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use crate::cache::errors::CacheError;

#[async_trait]
pub trait RedisCache: Send + Sync {
    /// Opens the connection and pings it. On failure nothing is stored and the
    /// error is returned as is.
    async fn init_client(&self) -> Result<(), CacheError>;

    /// Raw connection for commands this facade does not wrap.
    fn get_client(&self) -> Option<MultiplexedConnection>;

    /// A zero `ttl` stores the value without expiry.
    async fn try_set(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), CacheError>;

    /// `Ok(None)` when the key does not exist.
    async fn try_get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn try_delete(&self, key: &str) -> Result<i64, CacheError>;

    async fn set_redis_value(&self, key: &str, payload: &str, ttl: Duration) {
        let _ = self.try_set(key, payload, ttl).await;
    }

    /// Empty string for a missing key and for any failure alike.
    async fn get_redis_value(&self, key: &str) -> String {
        self.try_get(key).await.ok().flatten().unwrap_or_default()
    }

    /// Number of removed keys, or 0 on any failure.
    async fn delete_redis_value(&self, key: &str) -> i64 {
        self.try_delete(key).await.unwrap_or(0)
    }
}
