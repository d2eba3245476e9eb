//! Redis cache adapter.
//!
//! A thin facade over a Redis connection: options are resolved from a
//! [`CacheConfig`](crate::config::structs::cache_config::CacheConfig) with
//! defaults applied, the connection is opened and pinged by
//! [`init_client`](traits::redis_cache::RedisCache::init_client), and data
//! operations come in two flavours:
//!
//! - `try_get` / `try_set` / `try_delete` report misses and failures apart
//! - `get_redis_value` / `set_redis_value` / `delete_redis_value` collapse every
//!   failure into an empty string, a zero count or nothing at all
//!
//! In-flight commands are bounded by the configured pool size and each one is
//! cut off after the read timeout.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use service_common::cache::structs::redis_client::RedisClient;
//! use service_common::cache::traits::redis_cache::RedisCache;
//!
//! let cache = RedisClient::new(config);
//! cache.init_client().await?;
//! cache.set_redis_value("session:42", "payload", Duration::from_secs(60)).await;
//! let payload = cache.get_redis_value("session:42").await;
//! ```

/// Enumerations for cache operations.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for the Redis client.
pub mod impls;

/// Data structures for the Redis client.
pub mod structs;

/// Cache trait definitions.
pub mod traits;
