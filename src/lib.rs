//! # Dictfix - Word Dictionary Recovery
//!
//! Dictfix repairs a malformed JSON-like word-dictionary file (one
//! key/value candidate per line) by line-oriented regex extraction and
//! re-serialization into valid JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn example() -> dictfix::error::Result<()> {
//! let report = dictfix::recovery::recover_file(Path::new("en.json"), Path::new("fixed.json"))?;
//! println!("Processed {} words, skipped {} lines", report.entries, report.skipped.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`recovery`]: Line-by-line recovery of broken dictionary files
//! - [`filter`]: Unique-letter filtering of a recovered dictionary
//! - [`error`]: Error types and handling utilities
//! - [`logging`]: Tracing subscriber setup
//!
//! Recovery is best-effort by design: lines the key/value pattern cannot
//! extract a pair from are skipped with a diagnostic, never treated as
//! fatal. See [`recovery`] for the exact heuristic and its limitations.

pub mod error;
pub mod filter;
pub mod logging;
pub mod recovery;
