//! Logging macros that capture the calling function's name.
//!
//! Each macro takes the logger handle first and a format string after it:
//!
//! ```rust,ignore
//! log_warn!(logger, "retrying {} in {:?}", job, delay);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn probe() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(probe);
        name.strip_suffix("::probe").unwrap_or(name)
    }};
}

/// The [`CallSite`](crate::logs::structs::call_site::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::logs::structs::call_site::CallSite::new(file!(), line!(), Some($crate::__function_path!()))
    };
}

#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::logs::enums::severity::Severity::Print, $crate::call_site!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::logs::enums::severity::Severity::Debug, $crate::call_site!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::logs::enums::severity::Severity::Info, $crate::call_site!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::logs::enums::severity::Severity::Warn, $crate::call_site!(), format_args!($($arg)+))
    };
}

/// Logs and forwards the message to the error sink.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_at($crate::logs::enums::severity::Severity::Error, $crate::call_site!(), format_args!($($arg)+))
    };
}

/// Logs, forwards, then exits the process with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_at($crate::call_site!(), format_args!($($arg)+))
    };
}

/// Logs, forwards, then panics with the rendered message.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic_at($crate::call_site!(), format_args!($($arg)+))
    };
}
