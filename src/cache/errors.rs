use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Client not initialized: {0}")]
    NotInitialized(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
