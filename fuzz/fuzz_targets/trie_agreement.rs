// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dictionary matching.
//!
//! Both trie representations, the split search and the brute-force scan must
//! report the same words for any dictionary and query.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use levtrie::{
    accepted_words, reversed_words, CompactTrie, DictionaryIndex, FuzzyMatcher, PointerTrie,
};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    words: Vec<String>,
    query: String,
    max_error: u8,
}

fuzz_target!(|input: MatchInput| {
    let words: Vec<String> = input
        .words
        .iter()
        .take(64)
        .map(|w| w.chars().take(10).collect())
        .collect();
    let query: String = input.query.chars().take(10).collect();
    let max_error = usize::from(input.max_error % 3);

    let expected = accepted_words(&words, &query, max_error);

    let compact = CompactTrie::from_words(&words);
    let pointer = PointerTrie::from_words(&words);
    assert_eq!(FuzzyMatcher::new(&compact, max_error).find_matches(&query), expected);
    assert_eq!(FuzzyMatcher::new(&pointer, max_error).find_matches(&query), expected);

    if max_error == 2 {
        let backward = CompactTrie::from_words(&reversed_words(&words));
        let split = FuzzyMatcher::new(&compact, 2)
            .with_reversed(&backward)
            .expect("two edits always allow a reversed index");
        assert_eq!(split.find_matches(&query), expected);
    }
});
