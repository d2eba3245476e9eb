use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use parking_lot::RwLock;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, RedisResult};
use tokio::sync::Semaphore;
use crate::cache::enums::expiry::Expiry;
use crate::cache::errors::CacheError;
use crate::cache::structs::redis_client::RedisClient;
use crate::cache::structs::redis_options::RedisOptions;
use crate::cache::traits::redis_cache::RedisCache;
use crate::config::structs::cache_config::CacheConfig;
use crate::logs::structs::logger::Logger;
use crate::{log_debug, log_info};

impl RedisClient {
    pub fn new(config: CacheConfig) -> RedisClient {
        let options = RedisOptions::from(&config);
        RedisClient {
            permits: Arc::new(Semaphore::new(options.pool_size)),
            connection: RwLock::new(None),
            config,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn options(&self) -> &RedisOptions {
        &self.options
    }

    pub fn is_ready(&self) -> bool {
        self.connection.read().is_some()
    }

    fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        self.connection
            .read()
            .clone()
            .ok_or_else(|| CacheError::NotInitialized(self.config.name.clone()))
    }

    /// Runs one command under a pool permit and the read timeout.
    async fn bounded<T, F>(&self, operation: F) -> Result<T, CacheError>
    where
        F: Future<Output = RedisResult<T>> + Send,
    {
        let _permit = self.permits
            .acquire()
            .await
            .map_err(|e| CacheError::ConnectionError(e.to_string()))?;
        match tokio::time::timeout(self.options.read_timeout, operation).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(CacheError::Timeout(self.options.read_timeout)),
        }
    }
}

#[async_trait]
impl RedisCache for RedisClient {
    async fn init_client(&self) -> Result<(), CacheError> {
        let logger = Logger::global(None);
        log_info!(logger, "[Redis:{}] Start open redis connection to {}...", self.config.name, self.options.addr);

        let client = redis::Client::open(self.options.connection_url().as_str())?;
        let timeout = self.options.read_timeout;
        // a refused connection fails fast with the redis error; the timeout only cuts off a hanging handshake
        let mut connection = tokio::time::timeout(timeout, client.get_multiplexed_async_connection())
            .await
            .map_err(|_| CacheError::Timeout(timeout))??;
        tokio::time::timeout(timeout, redis::cmd("PING").query_async::<String>(&mut connection))
            .await
            .map_err(|_| CacheError::Timeout(timeout))??;

        *self.connection.write() = Some(connection);
        log_info!(logger, "[Redis:{}] Connected (db {}, pool {}, read timeout {:?})", self.config.name, self.options.db, self.options.pool_size, timeout);
        Ok(())
    }

    fn get_client(&self) -> Option<MultiplexedConnection> {
        self.connection.read().clone()
    }

    async fn try_set(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.connection()?;
        let result = match Expiry::from(ttl) {
            Expiry::Never => self.bounded(async move { conn.set::<_, _, ()>(key, payload).await }).await,
            Expiry::Seconds(seconds) => self.bounded(async move { conn.set_ex::<_, _, ()>(key, payload, seconds).await }).await,
            Expiry::Millis(millis) => self.bounded(async move { conn.pset_ex::<_, _, ()>(key, payload, millis).await }).await,
        };
        if let Err(error) = &result {
            log_debug!(Logger::global(None), "[Redis:{}] SET {} failed: {}", self.config.name, key, error);
        }
        result
    }

    async fn try_get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection()?;
        let result = self.bounded(async move { conn.get::<_, Option<String>>(key).await }).await;
        if let Err(error) = &result {
            log_debug!(Logger::global(None), "[Redis:{}] GET {} failed: {}", self.config.name, key, error);
        }
        result
    }

    async fn try_delete(&self, key: &str) -> Result<i64, CacheError> {
        let mut conn = self.connection()?;
        let result = self.bounded(async move { conn.del::<_, i64>(key).await }).await;
        if let Err(error) = &result {
            log_debug!(Logger::global(None), "[Redis:{}] DEL {} failed: {}", self.config.name, key, error);
        }
        result
    }
}

impl fmt::Debug for RedisClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisClient")
            .field("name", &self.config.name)
            .field("options", &RedactedOptions(&self.options))
            .field("ready", &self.is_ready())
            .finish()
    }
}

struct RedactedOptions<'a>(&'a RedisOptions);

impl fmt::Debug for RedactedOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisOptions")
            .field("addr", &self.0.addr)
            .field("password", &if self.0.password.is_empty() { "" } else { "<redacted>" })
            .field("db", &self.0.db)
            .field("pool_size", &self.0.pool_size)
            .field("read_timeout", &self.0.read_timeout)
            .finish()
    }
}
