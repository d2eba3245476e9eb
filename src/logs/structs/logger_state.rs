use std::sync::Arc;
use log::LevelFilter;
use parking_lot::RwLock;
use crate::logs::traits::error_sink::ErrorSink;

/// Fields shared by every clone of a [`Logger`](crate::logs::structs::logger::Logger).
///
/// `request_id` is last-write-wins: concurrent requests overwrite each other.
/// Request-bound handles carry their own id instead.
pub struct LoggerState {
    pub(crate) prefix: RwLock<String>,
    pub(crate) request_id: RwLock<String>,
    pub(crate) level: RwLock<LevelFilter>,
    pub(crate) sink: Arc<dyn ErrorSink>,
}
