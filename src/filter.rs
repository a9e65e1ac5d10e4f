//! Filter a recovered dictionary down to words with no repeated letters.
//!
//! Operates on an already-valid JSON object of string-to-string pairs
//! (normally the output of [`crate::recovery`]) and keeps only the entries
//! whose key contains no repeated character.

use crate::error::{Result, ResultExt as _};
use crate::recovery::WordDictionary;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default input file name: the recovery output.
pub const DEFAULT_INPUT: &str = "fixed.json";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "clean.json";

/// Summary of one filter run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FilterReport {
    /// Entries kept in the output file.
    pub kept: usize,
    /// Entries dropped because their key repeats a character.
    pub dropped: usize,
}

/// Check whether every character in the word is distinct.
pub fn has_unique_chars(word: &str) -> bool {
    let mut seen = HashSet::new();
    word.chars().all(|c| seen.insert(c))
}

/// Keep only the entries whose key has all-distinct characters.
pub fn filter_unique_words(dictionary: &WordDictionary) -> WordDictionary {
    dictionary
        .iter()
        .filter(|(word, _)| has_unique_chars(word))
        .map(|(word, definition)| (word.clone(), definition.clone()))
        .collect()
}

/// Filter a dictionary file, writing the kept entries as pretty JSON.
///
/// # Errors
///
/// Fails if the input cannot be read, is not a valid JSON object of string
/// pairs, or the output cannot be written.
pub fn filter_file(input: &Path, output: &Path) -> Result<FilterReport> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let dictionary: WordDictionary = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    let filtered = filter_unique_words(&dictionary);
    let report = FilterReport {
        kept: filtered.len(),
        dropped: dictionary.len() - filtered.len(),
    };

    let json = serde_json::to_string_pretty(&filtered)?;
    fs::write(output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(kept = report.kept, dropped = report.dropped, "filter complete");

    Ok(report)
}
