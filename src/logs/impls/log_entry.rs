use std::fmt;
use crate::logs::structs::log_entry::LogEntry;

pub(crate) const DEFAULT_TARGET: &str = "service_common";

impl LogEntry {
    /// Target used by the fern formatter; the prefix when one is set.
    pub fn target(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_TARGET)
    }

    pub fn emit(&self) {
        let level = self.severity.level();
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", self))
                .level(level)
                .target(self.target())
                .build(),
        );
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(prefix) = &self.prefix {
            write!(f, " prefix={}", prefix)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " requestID={}", request_id)?;
        }
        write!(f, " source={}", self.source)
    }
}
