use std::panic::Location;
use std::path::Path;
use crate::logs::structs::call_site::CallSite;

impl CallSite {
    pub fn new(file: &'static str, line: u32, function: Option<&'static str>) -> CallSite {
        CallSite { file, line, function }
    }

    #[track_caller]
    pub fn caller() -> CallSite {
        let location = Location::caller();
        CallSite {
            file: location.file(),
            line: location.line(),
            function: None,
        }
    }

    pub fn file_name(&self) -> &'static str {
        let file: &'static str = self.file;
        Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file)
    }

    /// `file.rs:42:function()`, or `file.rs:42` when the function is unknown.
    pub fn source(&self) -> String {
        match self.function.map(short_function).filter(|name| !name.is_empty()) {
            Some(function) => format!("{}:{}:{}()", self.file_name(), self.line, function),
            None => format!("{}:{}", self.file_name(), self.line),
        }
    }
}

/// Reduces a type path such as `crate::api::<impl Handler>::serve::{{closure}}`
/// to `serve`.
pub fn short_function(path: &str) -> &str {
    let mut path = path;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}
