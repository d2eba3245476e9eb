/// Severity of one logging call.
///
/// `Print` logs at info level. `Fatal` and `Panic` log at error level and then
/// terminate the process or the current thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Print,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}
