//! Common data structures.

/// Message-only error type used during startup.
pub mod custom_error;
