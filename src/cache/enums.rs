//! Cache enumerations.

/// Expiry command selected for a write.
pub mod expiry;
