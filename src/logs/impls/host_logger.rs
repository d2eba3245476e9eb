use std::io::Write;
use crate::logs::enums::host_level::HostLevel;
use crate::logs::structs::logger::Logger;
use crate::logs::traits::host_logger::HostLogger;

impl HostLogger for Logger {
    fn output(&self) -> Box<dyn Write + Send> {
        Box::new(std::io::stdout())
    }

    fn set_output(&self, _writer: Box<dyn Write + Send>) {}

    fn prefix(&self) -> String {
        self.state.prefix.read().clone()
    }

    fn set_prefix(&self, prefix: &str) {
        *self.state.prefix.write() = prefix.to_string();
    }

    fn level(&self) -> HostLevel {
        HostLevel::from_level_filter(self.level_filter())
    }

    fn set_level(&self, level: HostLevel) {
        self.set_level_filter(level.to_level_filter());
    }

    fn set_header(&self, _header: &str) {}
}
