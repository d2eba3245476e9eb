//! Cache traits.

/// Operations exposed by a cache backend.
pub mod redis_cache;
