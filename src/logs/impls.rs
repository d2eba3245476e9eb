//! Implementation blocks for logging types.

pub mod call_site;
pub mod host_level;
pub mod host_logger;
pub mod log_entry;
pub mod logger;
pub mod sentry_sink;
pub mod severity;
