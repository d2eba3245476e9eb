use crate::logs::enums::severity::Severity;

/// One decorated entry. Built for a single log call and dropped after emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub source: String,
    pub prefix: Option<String>,
    pub request_id: Option<String>,
    pub message: String,
}
