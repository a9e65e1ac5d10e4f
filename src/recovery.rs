//! Best-effort recovery of a malformed word-dictionary file.
//!
//! The input is expected to resemble a JSON object with possibly broken
//! syntax: stray quotes, trailing commas, curly quotation marks. Recovery is
//! line-oriented: each line is matched against a single key/value pattern,
//! matching pairs are collected into an order-preserving map, and the result
//! is re-serialized as valid JSON.
//!
//! The heuristic is inherently lossy for values containing embedded colons,
//! quotes, or multi-line content: the value capture runs greedily to the
//! final quote on the line, and anything that does not match the pattern is
//! skipped with a diagnostic rather than treated as an error.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn example() -> dictfix::error::Result<()> {
//! let report = dictfix::recovery::recover_file(Path::new("en.json"), Path::new("fixed.json"))?;
//! println!("Recovered {} entries", report.entries);
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, ResultExt as _};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize as _;
use std::fs::File;
use std::io::{BufRead as _, BufReader, BufWriter, Write as _};
use std::path::Path;
use std::sync::LazyLock;

/// Default input file name, matching the original hardcoded pair.
pub const DEFAULT_INPUT: &str = "en.json";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "fixed.json";

/// Word-to-definition mapping. Keys keep their first-seen position;
/// re-inserting a key overwrites the value in place.
pub type WordDictionary = IndexMap<String, String>;

/// Key/value extraction pattern: an optionally-quoted alphabetic key, a
/// colon, and a quoted value captured greedily to the final quote on the
/// line.
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"?([A-Za-z]+)"?\s*:\s*"(.+)""#).expect("entry pattern is valid")
});

/// Outcome of classifying a single raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A recoverable key/value pair.
    Entry {
        word: String,
        definition: String,
    },
    /// Structural punctuation (`{`, `}`) or a blank line; silently skipped.
    Structural,
    /// Anything the pattern cannot extract a pair from; skipped with a
    /// diagnostic.
    Malformed,
}

/// Summary of one recovery run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RecoveryReport {
    /// Number of entries written to the output file.
    pub entries: usize,
    /// Trimmed content of every line the pattern could not extract a pair
    /// from, in input order.
    pub skipped: Vec<String>,
}

/// Classify one raw line of input.
///
/// Trims surrounding whitespace, drops structural lines, strips a single
/// trailing comma, then attempts key/value extraction. Curly double quotes
/// in the value are normalized to straight quotes.
pub fn classify_line(raw: &str) -> LineOutcome {
    let line = raw.trim();
    if line.is_empty() || line == "{" || line == "}" {
        return LineOutcome::Structural;
    }

    let line = line.strip_suffix(',').unwrap_or(line);

    match ENTRY_RE.captures(line) {
        Some(caps) => {
            let (_, [word, definition]) = caps.extract();
            LineOutcome::Entry {
                word: word.trim().to_owned(),
                definition: normalize_quotes(definition.trim()),
            }
        }
        None => LineOutcome::Malformed,
    }
}

/// Replace curly double quotation marks (U+201C / U+201D) with straight
/// quotes. Dictionary definitions scraped from formatted sources tend to
/// carry these.
fn normalize_quotes(value: &str) -> String {
    value.replace(['\u{201C}', '\u{201D}'], "\"")
}

/// Build a word dictionary from an iterator of raw lines.
///
/// Returns the dictionary plus the trimmed content of every malformed line.
/// Duplicate keys take the last value seen but keep their first-seen
/// position in the output.
pub fn recover_lines<'a, I>(lines: I) -> (WordDictionary, Vec<String>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dictionary = WordDictionary::new();
    let mut skipped = Vec::new();

    for raw in lines {
        match classify_line(raw) {
            LineOutcome::Entry { word, definition } => {
                dictionary.insert(word, definition);
            }
            LineOutcome::Structural => {}
            LineOutcome::Malformed => {
                let line = raw.trim().to_owned();
                tracing::warn!("skipping malformed line: {line}");
                skipped.push(line);
            }
        }
    }

    (dictionary, skipped)
}

/// Recover a malformed dictionary file into valid JSON.
///
/// Reads `input` line by line, extracts every recoverable key/value pair,
/// and writes the result to `output` as a JSON object with 4-space
/// indentation and keys in first-seen order.
///
/// # Errors
///
/// Fails if the input cannot be read or the output cannot be written. The
/// error message names the last line that was being processed, when one is
/// available. Malformed lines are not errors; they are reported in the
/// returned [`RecoveryReport`].
pub fn recover_file(input: &Path, output: &Path) -> Result<RecoveryReport> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let reader = BufReader::new(file);

    let mut dictionary = WordDictionary::new();
    let mut skipped = Vec::new();
    let mut last_line = String::new();

    for line in reader.lines() {
        let raw = line.with_context(|| {
            format!("Failed to read input (last line seen: {last_line})")
        })?;
        last_line = raw.trim().to_owned();

        match classify_line(&raw) {
            LineOutcome::Entry { word, definition } => {
                dictionary.insert(word, definition);
            }
            LineOutcome::Structural => {}
            LineOutcome::Malformed => {
                tracing::warn!("skipping malformed line: {last_line}");
                skipped.push(last_line.clone());
            }
        }
    }

    write_dictionary(&dictionary, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!(
        entries = dictionary.len(),
        skipped = skipped.len(),
        "recovery complete"
    );

    Ok(RecoveryReport {
        entries: dictionary.len(),
        skipped,
    })
}

/// Serialize the dictionary as a JSON object with 4-space indentation.
fn write_dictionary(dictionary: &WordDictionary, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    dictionary.serialize(&mut ser)?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, clippy::indexing_slicing)]
    use super::*;

    #[test]
    fn test_classify_well_formed_line() {
        let outcome = classify_line("  \"cat\": \"a small domesticated feline\",");
        assert_eq!(
            outcome,
            LineOutcome::Entry {
                word: "cat".to_owned(),
                definition: "a small domesticated feline".to_owned(),
            }
        );
    }

    #[test]
    fn test_classify_unquoted_key() {
        let outcome = classify_line("dog: \"a domesticated canine\"");
        assert_eq!(
            outcome,
            LineOutcome::Entry {
                word: "dog".to_owned(),
                definition: "a domesticated canine".to_owned(),
            }
        );
    }

    #[test]
    fn test_structural_lines_are_silent() {
        assert_eq!(classify_line("{"), LineOutcome::Structural);
        assert_eq!(classify_line("  }  "), LineOutcome::Structural);
        assert_eq!(classify_line("   "), LineOutcome::Structural);
        assert_eq!(classify_line(""), LineOutcome::Structural);
    }

    #[test]
    fn test_malformed_lines() {
        // No colon, no quotes
        assert_eq!(classify_line("badline"), LineOutcome::Malformed);
        // Digits are not allowed in keys
        assert_eq!(classify_line("\"word2\": \"def\""), LineOutcome::Malformed);
        // Unquoted value
        assert_eq!(classify_line("\"cat\": feline"), LineOutcome::Malformed);
        // Empty value
        assert_eq!(classify_line("\"cat\": \"\""), LineOutcome::Malformed);
    }

    #[test]
    fn test_curly_quotes_normalized() {
        let outcome = classify_line("\"quip\": \"he said \u{201C}hello\u{201D} twice\"");
        assert_eq!(
            outcome,
            LineOutcome::Entry {
                word: "quip".to_owned(),
                definition: "he said \"hello\" twice".to_owned(),
            }
        );
    }

    #[test]
    fn test_value_runs_to_final_quote() {
        // Embedded straight quotes stay inside the value: the capture is
        // greedy to the last quote on the line.
        let outcome = classify_line("\"ad\": \"short for \"advertisement\"\",");
        assert_eq!(
            outcome,
            LineOutcome::Entry {
                word: "ad".to_owned(),
                definition: "short for \"advertisement\"".to_owned(),
            }
        );
    }

    #[test]
    fn test_recover_lines_order_and_duplicates() {
        let input = [
            "{",
            "\"cat\": \"first\",",
            "\"dog\": \"a domesticated canine\",",
            "\"cat\": \"second\",",
            "}",
        ];
        let (dict, skipped) = recover_lines(input);

        assert!(skipped.is_empty());
        assert_eq!(dict.len(), 2);
        // Last value wins, first-seen position kept
        assert_eq!(dict["cat"], "second");
        let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, ["cat", "dog"]);
    }

    #[test]
    fn test_recover_lines_skips_malformed() {
        let input = ["\"cat\": \"feline\",", "badline", "\"dog\": \"canine\""];
        let (dict, skipped) = recover_lines(input);

        assert_eq!(dict.len(), 2);
        assert_eq!(skipped, vec!["badline".to_owned()]);
    }

    #[test]
    fn test_round_trip_of_valid_json() {
        // An already-valid flat string map, one pair per line, recovers to
        // the identical mapping.
        let original: WordDictionary = [
            ("apple".to_owned(), "a fruit".to_owned()),
            ("banana".to_owned(), "another fruit".to_owned()),
            ("cherry".to_owned(), "a stone fruit".to_owned()),
        ]
        .into_iter()
        .collect();

        let pretty = serde_json::to_string_pretty(&original).unwrap();
        let (recovered, skipped) = recover_lines(pretty.lines());

        assert!(skipped.is_empty());
        assert_eq!(recovered, original);
    }
}
