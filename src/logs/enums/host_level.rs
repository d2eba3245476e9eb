use serde::{Deserialize, Serialize};

/// Log level scale of the HTTP host framework.
///
/// Numeric codes follow the framework: `Debug = 1` through `Off = 5`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum HostLevel {
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}
