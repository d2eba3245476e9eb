use serde::{Deserialize, Serialize};
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub log_prefix: String,
    pub http_server: HttpServerConfig,
    pub sentry_config: SentryConfig,
    #[serde(default)]
    pub cache: Vec<CacheConfig>
}
