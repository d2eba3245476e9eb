//! Logging structures.

/// Location of a log call.
pub mod call_site;

/// A decorated, single-use log entry.
pub mod log_entry;

/// The logger handle.
pub mod logger;

/// State shared by every clone of a logger handle.
pub mod logger_state;

/// Error sink backed by the Sentry SDK.
pub mod sentry_sink;
