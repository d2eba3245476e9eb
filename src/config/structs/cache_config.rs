use std::time::Duration;
use serde::{
    Deserialize,
    Serialize
};

/// Connection settings for one Redis backend.
///
/// Zero values mean "use the default": `db` stays 0, `pool_size` becomes 64 and
/// `read_timeout` becomes ten seconds once resolved into
/// [`RedisOptions`](crate::cache::structs::redis_options::RedisOptions).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub name: String,
    pub host: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub db: i64,
    #[serde(default)]
    pub pool_size: usize,
    #[serde(default, with = "serde_millis")]
    pub read_timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            host: "127.0.0.1:6379".to_string(),
            password: String::new(),
            db: 0,
            pool_size: 0,
            read_timeout: Duration::ZERO,
        }
    }
}
