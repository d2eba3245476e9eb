use std::time::Duration;
use crate::logs::structs::sentry_sink::SentrySink;
use crate::logs::traits::error_sink::ErrorSink;

impl SentrySink {
    pub fn new(flush_timeout: Duration) -> SentrySink {
        SentrySink { flush_timeout }
    }
}

impl Default for SentrySink {
    fn default() -> Self {
        SentrySink::new(Duration::from_secs(2))
    }
}

impl ErrorSink for SentrySink {
    fn capture_message(&self, message: &str, level: sentry::Level) {
        sentry::capture_message(message, level);
    }

    fn set_tag(&self, key: &str, value: &str) {
        sentry::configure_scope(|scope| scope.set_tag(key, value));
    }

    fn flush(&self) {
        if let Some(client) = sentry::Hub::current().client() {
            client.flush(Some(self.flush_timeout));
        }
    }
}
