//! Logging enumerations.

/// Level enum used by the HTTP host framework.
pub mod host_level;

/// Severity of a single log call.
pub mod severity;
