// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests don't each invent their own.

#![doc(hidden)]

use std::collections::BTreeSet;

use crate::automaton::build_nfa;
use crate::dictionary::{reversed_words, CompactTrie, DictionaryIndex};

/// The small dictionary most matcher tests run against.
pub const ANIMALS: &[&str] = &["cat", "cats", "car", "care", "dog"];

/// A larger list with plenty of shared prefixes and near misses.
pub const SPELLING: &[&str] = &[
    "apple", "apply", "ample", "maple", "kitten", "sitting", "mitten", "bitten", "kitchen",
    "written", "sitter", "fitting", "knitting", "hello", "hallo", "hullo", "yellow", "fellow",
    "mellow", "help", "world", "word", "ward", "sword", "wordy",
];

/// Collect string literals into the set type the matcher returns.
pub fn set_of(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Forward and reversed compact tries over the same words.
pub fn forward_and_reversed(words: &[&str]) -> (CompactTrie, CompactTrie) {
    (
        CompactTrie::from_words(words),
        CompactTrie::from_words(&reversed_words(words)),
    )
}

/// Candidate strings around `pattern`: itself, every single deletion, every
/// substitution and insertion with `filler`, and a few unrelated strings.
pub fn candidates_around(pattern: &str, filler: char) -> Vec<String> {
    let units: Vec<char> = pattern.chars().collect();
    let mut out = vec![pattern.to_string(), String::new(), "zzzz".to_string()];

    for i in 0..units.len() {
        let mut deleted = units.clone();
        deleted.remove(i);
        out.push(deleted.into_iter().collect());

        let mut substituted = units.clone();
        substituted[i] = filler;
        out.push(substituted.into_iter().collect());
    }
    for i in 0..=units.len() {
        let mut inserted = units.clone();
        inserted.insert(i, filler);
        out.push(inserted.into_iter().collect());
    }
    out
}

/// Accept/reject decisions of the NFA for `pattern` over `candidates`.
pub fn nfa_verdicts(pattern: &str, max_error: usize, candidates: &[String]) -> Vec<bool> {
    let nfa = build_nfa(pattern, max_error);
    candidates.iter().map(|c| nfa.accepts(c)).collect()
}
