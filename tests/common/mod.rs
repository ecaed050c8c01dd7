//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::io::Write;

use tempfile::NamedTempFile;

// Re-export canonical fixtures from levtrie::testing
pub use levtrie::testing::{set_of, ANIMALS, SPELLING};

// ============================================================================
// ORACLES
// ============================================================================

/// Every word within `max` edits of `query`, decided by `strsim`.
///
/// Deliberately independent of the crate's own distance code.
pub fn strsim_oracle<S: AsRef<str>>(words: &[S], query: &str, max: usize) -> BTreeSet<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| strsim::levenshtein(query, word) <= max)
        .map(str::to_string)
        .collect()
}

// ============================================================================
// FILE FIXTURES
// ============================================================================

/// Write `lines` to a temporary file, one per line.
pub fn word_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("write temp file");
    }
    file.flush().expect("flush temp file");
    file
}
