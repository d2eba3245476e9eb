use std::sync::Arc;
use crate::logs::structs::logger_state::LoggerState;

/// Cheap-to-clone logging handle.
///
/// Clones share prefix, level, sink and the last-seen request id. A handle
/// produced by [`Logger::bind_request_id`] additionally pins its own request id,
/// which wins over the shared one when entries are decorated.
///
/// The plain methods record their caller as `file:line`. Use the `log_*!`
/// macros when the entry's `source` should also name the calling function.
#[derive(Clone)]
pub struct Logger {
    pub(crate) state: Arc<LoggerState>,
    pub(crate) bound_request_id: Option<Arc<str>>,
}
