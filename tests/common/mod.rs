#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;
use service_common::config::structs::cache_config::CacheConfig;
use service_common::config::structs::configuration::Configuration;
use service_common::logs::structs::logger::Logger;
use service_common::logs::structs::sentry_sink::SentrySink;

pub type TestConfig = Arc<Configuration>;

pub const REDIS_TEST_HOST: &str = "REDIS_TEST_HOST";

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.log_prefix = "test".to_string();
    config.http_server.bind_address = "127.0.0.1:0".to_string();
    Arc::new(config)
}

pub fn create_sentry_logger(prefix: &str) -> Logger {
    Logger::new(prefix, Arc::new(SentrySink::new(Duration::from_millis(100))))
}

/// Cache config for a live Redis named by `REDIS_TEST_HOST`, if one is available.
pub fn live_cache_config() -> Option<CacheConfig> {
    let host = std::env::var(REDIS_TEST_HOST).ok().filter(|host| !host.is_empty())?;
    Some(CacheConfig {
        name: "live".to_string(),
        host,
        db: 15,
        read_timeout: Duration::from_secs(2),
        ..CacheConfig::default()
    })
}

pub fn unique_key(label: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("service-common:test:{}:{}", label, nanos)
}
