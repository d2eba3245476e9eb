use std::fmt;
use log::LevelFilter;
use crate::logs::enums::host_level::HostLevel;

impl HostLevel {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Converts the logger's filter outward. Anything without a counterpart on the
    /// host scale (`Trace`, `Off`) becomes [`HostLevel::Off`].
    pub fn from_level_filter(filter: LevelFilter) -> HostLevel {
        match filter {
            LevelFilter::Debug => HostLevel::Debug,
            LevelFilter::Info => HostLevel::Info,
            LevelFilter::Warn => HostLevel::Warn,
            LevelFilter::Error => HostLevel::Error,
            LevelFilter::Trace | LevelFilter::Off => HostLevel::Off,
        }
    }

    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            HostLevel::Debug => LevelFilter::Debug,
            HostLevel::Info => LevelFilter::Info,
            HostLevel::Warn => LevelFilter::Warn,
            HostLevel::Error => LevelFilter::Error,
            HostLevel::Off => LevelFilter::Off,
        }
    }
}

/// Raw host level codes. Unknown codes fall back to `Info`.
impl From<u8> for HostLevel {
    fn from(code: u8) -> Self {
        match code {
            1 => HostLevel::Debug,
            2 => HostLevel::Info,
            3 => HostLevel::Warn,
            4 => HostLevel::Error,
            5 => HostLevel::Off,
            _ => HostLevel::Info,
        }
    }
}

impl From<HostLevel> for LevelFilter {
    fn from(level: HostLevel) -> Self {
        level.to_level_filter()
    }
}

impl fmt::Display for HostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostLevel::Debug => write!(f, "DEBUG"),
            HostLevel::Info => write!(f, "INFO"),
            HostLevel::Warn => write!(f, "WARN"),
            HostLevel::Error => write!(f, "ERROR"),
            HostLevel::Off => write!(f, "OFF"),
        }
    }
}
