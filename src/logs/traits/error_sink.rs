#[cfg(test)]
use mockall::automock;

/// Receives forwarded messages and request tags.
///
/// Implementations must not fail loudly: forwarding is best effort and nothing
/// is returned to the caller.
#[cfg_attr(test, automock)]
pub trait ErrorSink: Send + Sync {
    fn capture_message(&self, message: &str, level: sentry::Level);

    fn set_tag(&self, key: &str, value: &str);

    /// Blocks until queued messages are delivered. Called before a fatal exit.
    fn flush(&self) {}
}
