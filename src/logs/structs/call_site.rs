/// Where a log call was made.
///
/// `function` is only known when the call goes through one of the logging
/// macros; plain method calls capture file and line through `#[track_caller]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: Option<&'static str>,
}
