use std::time::Duration;

/// Connection options after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisOptions {
    pub addr: String,
    pub password: String,
    pub db: i64,
    pub pool_size: usize,
    pub read_timeout: Duration,
}
