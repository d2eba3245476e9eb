use std::fmt;
use std::sync::Arc;
use log::LevelFilter;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde_json::Value;
use crate::logs::enums::severity::Severity;
use crate::logs::structs::call_site::CallSite;
use crate::logs::structs::log_entry::LogEntry;
use crate::logs::structs::logger::Logger;
use crate::logs::structs::logger_state::LoggerState;
use crate::logs::structs::sentry_sink::SentrySink;
use crate::logs::traits::error_sink::ErrorSink;

static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

impl Logger {
    pub fn new(prefix: &str, sink: Arc<dyn ErrorSink>) -> Logger {
        Logger {
            state: Arc::new(LoggerState {
                prefix: RwLock::new(prefix.to_string()),
                request_id: RwLock::new(String::new()),
                level: RwLock::new(LevelFilter::Info),
                sink,
            }),
            bound_request_id: None,
        }
    }

    /// Process-wide logger forwarding to Sentry.
    ///
    /// The first call creates it. Later calls return the same handle, but a
    /// non-empty `prefix` that differs (ignoring case) from the stored one
    /// replaces it for every holder of the handle.
    pub fn global(prefix: Option<&str>) -> &'static Logger {
        let logger = GLOBAL_LOGGER.get_or_init(|| {
            Logger::new(prefix.unwrap_or_default(), Arc::new(SentrySink::default()))
        });
        if let Some(prefix) = prefix
            && !prefix.is_empty() {
                let current = logger.state.prefix.read().clone();
                if current.to_lowercase() != prefix.to_lowercase() {
                    *logger.state.prefix.write() = prefix.to_string();
                }
            }
        logger
    }

    /// A handle sharing this logger's state whose entries always carry
    /// `request_id`, whatever the shared field says.
    pub fn bind_request_id(&self, request_id: &str) -> Logger {
        Logger {
            state: self.state.clone(),
            bound_request_id: Some(Arc::from(request_id)),
        }
    }

    /// The request id entries from this handle are decorated with.
    pub fn request_id(&self) -> String {
        match &self.bound_request_id {
            Some(request_id) => request_id.to_string(),
            None => self.state.request_id.read().clone(),
        }
    }

    /// Overwrites the shared request id. Last write wins across all handles.
    pub fn set_request_id(&self, request_id: &str) {
        *self.state.request_id.write() = request_id.to_string();
    }

    pub fn level_filter(&self) -> LevelFilter {
        *self.state.level.read()
    }

    pub fn set_level_filter(&self, filter: LevelFilter) {
        *self.state.level.write() = filter;
    }

    pub fn sink(&self) -> &Arc<dyn ErrorSink> {
        &self.state.sink
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity.level() <= self.level_filter()
    }

    pub fn decorate(&self, severity: Severity, call_site: CallSite, message: String) -> LogEntry {
        let prefix = self.state.prefix.read().clone();
        let request_id = self.request_id();
        LogEntry {
            severity,
            source: call_site.source(),
            prefix: (!prefix.is_empty()).then_some(prefix),
            request_id: (!request_id.is_empty()).then_some(request_id),
            message,
        }
    }

    fn write(&self, severity: Severity, call_site: CallSite, message: String) -> String {
        let message = if self.enabled(severity) {
            let entry = self.decorate(severity, call_site, message);
            entry.emit();
            entry.message
        } else {
            message
        };
        // forwarding does not depend on the level filter
        if severity.forwards() {
            self.state.sink.capture_message(&message, severity.sentry_level());
        }
        message
    }

    /// Writes one entry. `Fatal` exits the process and `Panic` panics after the
    /// entry is written and forwarded.
    pub fn log_at(&self, severity: Severity, call_site: CallSite, args: fmt::Arguments<'_>) {
        match severity {
            Severity::Fatal => self.fatal_at(call_site, args),
            Severity::Panic => self.panic_at(call_site, args),
            _ => {
                self.write(severity, call_site, args.to_string());
            }
        }
    }

    pub fn fatal_at(&self, call_site: CallSite, args: fmt::Arguments<'_>) -> ! {
        self.write(Severity::Fatal, call_site, args.to_string());
        self.state.sink.flush();
        log::logger().flush();
        std::process::exit(1)
    }

    pub fn panic_at(&self, call_site: CallSite, args: fmt::Arguments<'_>) -> ! {
        let message = self.write(Severity::Panic, call_site, args.to_string());
        panic!("{}", message)
    }

    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        self.log_at(Severity::Print, CallSite::caller(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn printj(&self, json: &Value) {
        self.log_at(Severity::Print, CallSite::caller(), format_args!("{}", json));
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at(Severity::Debug, CallSite::caller(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn debugj(&self, json: &Value) {
        self.log_at(Severity::Debug, CallSite::caller(), format_args!("{}", json));
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at(Severity::Info, CallSite::caller(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn infoj(&self, json: &Value) {
        self.log_at(Severity::Info, CallSite::caller(), format_args!("{}", json));
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log_at(Severity::Warn, CallSite::caller(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn warnj(&self, json: &Value) {
        self.log_at(Severity::Warn, CallSite::caller(), format_args!("{}", json));
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_at(Severity::Error, CallSite::caller(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn errorj(&self, json: &Value) {
        self.log_at(Severity::Error, CallSite::caller(), format_args!("{}", json));
    }

    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_at(CallSite::caller(), format_args!("{}", message))
    }

    #[track_caller]
    pub fn fatalj(&self, json: &Value) -> ! {
        self.fatal_at(CallSite::caller(), format_args!("{}", json))
    }

    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.panic_at(CallSite::caller(), format_args!("{}", message))
    }

    #[track_caller]
    pub fn panicj(&self, json: &Value) -> ! {
        self.panic_at(CallSite::caller(), format_args!("{}", json))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("prefix", &*self.state.prefix.read())
            .field("request_id", &self.request_id())
            .field("level", &self.level_filter())
            .field("sink", &"<dyn ErrorSink>")
            .finish()
    }
}
