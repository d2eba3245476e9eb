//! Decorated logging with error-tracker forwarding.
//!
//! Every entry written through a [`Logger`](structs::logger::Logger) carries the
//! call site (`file:line:function()`), the display prefix and, when known, the
//! request identifier. Entries at `Error`, `Fatal` and `Panic` severity are also
//! forwarded to an [`ErrorSink`](traits::error_sink::ErrorSink), which is Sentry
//! for the process-wide logger.
//!
//! # Example
//!
//! ```rust,ignore
//! use service_common::log_info;
//! use service_common::logs::structs::logger::Logger;
//!
//! let logger = Logger::global(Some("billing"));
//! log_info!(logger, "invoice {} settled", invoice_id);
//! logger.error("payment gateway unreachable");
//! ```

/// Severity and host framework level enumerations.
pub mod enums;

/// Logger, decorated entry and call-site structures.
pub mod structs;

/// Implementation blocks for logging types.
pub mod impls;

/// Error sink and host logger traits.
pub mod traits;

/// Call-site capturing logging macros.
pub mod macros;

mod tests;
