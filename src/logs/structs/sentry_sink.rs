use std::time::Duration;

/// Forwards to whichever Sentry hub is current on the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct SentrySink {
    pub(crate) flush_timeout: Duration,
}
