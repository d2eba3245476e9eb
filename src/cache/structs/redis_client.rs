use std::sync::Arc;
use parking_lot::RwLock;
use redis::aio::MultiplexedConnection;
use tokio::sync::Semaphore;
use crate::cache::structs::redis_options::RedisOptions;
use crate::config::structs::cache_config::CacheConfig;

/// Redis facade. Holds no connection until `init_client` succeeds.
pub struct RedisClient {
    pub(crate) config: CacheConfig,
    pub(crate) options: RedisOptions,
    pub(crate) permits: Arc<Semaphore>,
    pub(crate) connection: RwLock<Option<MultiplexedConnection>>,
}
