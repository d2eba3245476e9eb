use std::io::Write;
use crate::logs::enums::host_level::HostLevel;

/// The logger surface an HTTP host framework expects to be able to drive.
pub trait HostLogger {
    fn output(&self) -> Box<dyn Write + Send>;

    /// Accepted for interface compatibility. Output is owned by the process-wide
    /// log dispatcher, so the writer is dropped.
    fn set_output(&self, writer: Box<dyn Write + Send>);

    fn prefix(&self) -> String;

    fn set_prefix(&self, prefix: &str);

    fn level(&self) -> HostLevel;

    fn set_level(&self, level: HostLevel);

    /// Accepted for interface compatibility; the header format is fixed.
    fn set_header(&self, header: &str);
}
