mod common;

use std::fs;
use tempfile::TempDir;
use service_common::config::enums::configuration_error::ConfigurationError;
use service_common::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config: common::TestConfig = common::create_test_config();
    assert_eq!(config.log_level, "info");
    assert!(!config.sentry_config.enabled, "Sentry should be disabled by default");
    assert_eq!(config.cache[0].pool_size, 0, "Pool size should default through the cache adapter");
}

#[test]
fn test_load_from_file_creates_missing_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    let result = Configuration::load_from_file(path, false);
    assert!(result.is_err());
    assert!(!config_path.exists(), "Config should not be created without --create-config");

    let result = Configuration::load_from_file(path, true);
    assert!(result.is_err(), "Creating the config asks the operator to edit it first");
    assert!(config_path.exists(), "Config file should exist");

    let config = Configuration::load_from_file(path, false).unwrap();
    assert_eq!(config.cache.len(), 1);
    assert_eq!(config.cache[0].host, "127.0.0.1:6379");
}

#[test]
fn test_load_file_with_cache_backends() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"
log_prefix = "orders"

[http_server]
enabled = false
bind_address = "0.0.0.0:8080"

[sentry_config]
enabled = false
dsn = ""
debug = false
sample_rate = 1.0
max_breadcrumbs = 100
attach_stacktrace = true
send_default_pii = false
traces_sample_rate = 0.0

[[cache]]
name = "sessions"
host = "10.0.0.5:6379"
password = "secret"
db = 2
pool_size = 16
read_timeout = 3000

[[cache]]
name = "rates"
host = "10.0.0.6:6379"
"#;

    fs::write(&config_path, config_content).unwrap();
    let config = Configuration::load_file(config_path.to_str().unwrap()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.log_prefix, "orders");
    assert_eq!(config.cache.len(), 2);
    assert_eq!(config.cache[0].db, 2);
    assert_eq!(config.cache[1].pool_size, 0);
}

#[test]
fn test_load_file_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = [").unwrap();
    let result = Configuration::load_file(config_path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
}
