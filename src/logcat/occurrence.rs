//! Caller location captured at the log call site.

use std::fmt;
use std::panic::Location;

/// Source location of a log call.
///
/// Captured with `#[track_caller]`, so functions that forward an
/// `Occurrence::here()` must themselves be `#[track_caller]` for the
/// location to point at the user's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    file: &'static str,
    line: u32,
}

impl Occurrence {
    /// Capture the location of the caller.
    #[track_caller]
    pub fn here() -> Self {
        Self::from(Location::caller())
    }

    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Full path as recorded by the compiler.
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Last path component, e.g. `main.rs`.
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }

    /// File name up to its first `.`, e.g. `main` for `main.rs`.
    pub fn file_stem(&self) -> &'static str {
        let name = self.file_name();
        name.split('.').next().unwrap_or(name)
    }
}

impl From<&'static Location<'static>> for Occurrence {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}
