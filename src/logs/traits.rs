//! Logging traits.

/// Destination for forwarded error messages and request tags.
pub mod error_sink;

/// Logger interface expected by the HTTP host framework.
pub mod host_logger;
