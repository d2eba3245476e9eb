//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Cache backend configuration (Redis).
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP server configuration.
pub mod http_server_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
