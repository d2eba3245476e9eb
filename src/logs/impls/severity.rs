use std::fmt;
use crate::logs::enums::severity::Severity;

impl Severity {
    pub fn level(&self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Print | Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error | Severity::Fatal | Severity::Panic => log::Level::Error,
        }
    }

    /// Only `Error`, `Fatal` and `Panic` reach the error sink. `Warn` stays local.
    pub fn forwards(&self) -> bool {
        matches!(self, Severity::Error | Severity::Fatal | Severity::Panic)
    }

    pub fn sentry_level(&self) -> sentry::Level {
        match self {
            Severity::Debug => sentry::Level::Debug,
            Severity::Print | Severity::Info => sentry::Level::Info,
            Severity::Warn => sentry::Level::Warning,
            Severity::Error => sentry::Level::Error,
            Severity::Fatal | Severity::Panic => sentry::Level::Fatal,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Print => write!(f, "print"),
            Severity::Debug => write!(f, "debug"),
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
            Severity::Panic => write!(f, "panic"),
        }
    }
}
