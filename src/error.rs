//! Centralized error handling for dictfix.
//!
//! All recovery failures collapse into one error type: the tool either
//! finishes with a count of recovered entries, or reports a single
//! human-readable failure line. Individual malformed input lines are never
//! errors; they are skipped with a diagnostic and processing continues.
//!
//! The `From` impls let the `?` operator convert I/O and JSON errors
//! automatically, and [`ResultExt`] adds `.context()` / `.with_context()`
//! for attaching the last line being processed to a failure:
//!
//! ```no_run
//! use dictfix::error::{Result, ResultExt as _};
//! use std::fs;
//!
//! fn load(path: &str) -> Result<String> {
//!     fs::read_to_string(path).context("Failed to read dictionary file")
//! }
//! ```

use std::fmt;

/// Main error type for dictfix operations.
#[derive(Debug)]
pub enum DictfixError {
    /// I/O errors reading the input or writing the output file.
    Io(std::io::Error),

    /// JSON serialization or deserialization errors.
    Json(serde_json::Error),

    /// Recovery failure with context (usually the last line processed).
    Recovery(String),
}

impl fmt::Display for DictfixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Recovery(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DictfixError {}

impl From<std::io::Error> for DictfixError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DictfixError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Result type alias for dictfix operations.
pub type Result<T> = std::result::Result<T, DictfixError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<DictfixError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: DictfixError = e.into();
            DictfixError::Recovery(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: DictfixError = e.into();
            DictfixError::Recovery(format!("{}: {}", f(), err))
        })
    }
}
