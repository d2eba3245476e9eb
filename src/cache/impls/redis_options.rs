use std::time::Duration;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use crate::cache::structs::redis_options::RedisOptions;
use crate::config::structs::cache_config::CacheConfig;

pub const DEFAULT_POOL_SIZE: usize = 64;
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

impl From<&CacheConfig> for RedisOptions {
    fn from(config: &CacheConfig) -> Self {
        RedisOptions {
            addr: config.host.clone(),
            password: config.password.clone(),
            db: config.db,
            pool_size: if config.pool_size != 0 { config.pool_size } else { DEFAULT_POOL_SIZE },
            read_timeout: if !config.read_timeout.is_zero() { config.read_timeout } else { DEFAULT_READ_TIMEOUT },
        }
    }
}

impl RedisOptions {
    /// `redis://[:password@]addr/db`, with the password percent-encoded.
    pub fn connection_url(&self) -> String {
        if self.password.is_empty() {
            format!("redis://{}/{}", self.addr, self.db)
        } else {
            format!(
                "redis://:{}@{}/{}",
                utf8_percent_encode(&self.password, NON_ALPHANUMERIC),
                self.addr,
                self.db
            )
        }
    }
}
