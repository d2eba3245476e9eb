//! # service-common
//!
//! Shared infrastructure adapters for actix-web services.
//!
//! ## Overview
//!
//! - A decorated logger that tags every entry with its call site, a display
//!   prefix and the current request id, and forwards errors to Sentry
//! - A request-id middleware that threads `X-Request-Id` through the logger and
//!   the Sentry scope
//! - A Redis cache facade with defaulted connection options, bounded in-flight
//!   commands and zero-value or tri-state data operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use service_common::cache::structs::redis_client::RedisClient;
//! use service_common::cache::traits::redis_cache::RedisCache;
//! use service_common::logs::structs::logger::Logger;
//! use service_common::middleware::structs::request_id_middleware::RequestIdMiddleware;
//!
//! let logger = Logger::global(Some("orders"));
//! let cache = RedisClient::new(config.cache[0].clone());
//! cache.init_client().await?;
//!
//! let app = App::new().wrap(RequestIdMiddleware::new(logger.clone()));
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Redis cache adapter
//! - [`common`] - Shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`logging`] - Process-wide log dispatcher and Sentry setup
//! - [`logs`] - Decorated logger and error sink
//! - [`middleware`] - Request-id middleware
//! - [`structs`] - CLI argument parsing

/// Redis cache adapter.
///
/// Resolves connection options with defaults, opens and pings the connection,
/// and exposes get/set/delete with TTL support.
pub mod cache;

/// Shared error type used during startup.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// fern dispatcher and Sentry client setup.
pub mod logging;

/// Decorated logger with call-site metadata and error forwarding.
pub mod logs;

/// Request-id middleware for actix-web.
pub mod middleware;

/// CLI argument parsing.
pub mod structs;
