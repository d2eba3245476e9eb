//! Cache structures.

/// Redis client wrapper.
pub mod redis_client;

/// Connection options resolved from configuration.
pub mod redis_options;
