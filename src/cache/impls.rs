//! Implementation blocks for cache structures.

pub mod expiry;
pub mod redis_client;
pub mod redis_options;
