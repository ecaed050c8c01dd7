// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Levenshtein automata.
//!
//! The DFA must accept a candidate exactly when its edit distance to the
//! pattern is within budget, and must agree with the NFA it came from.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use levtrie::{build_dfa, build_nfa, levenshtein};

#[derive(Debug, Arbitrary)]
struct AutomatonInput {
    pattern: String,
    candidate: String,
    max_error: u8,
}

fuzz_target!(|input: AutomatonInput| {
    // Cap sizes; DFA construction is exponential in the budget
    let pattern: String = input.pattern.chars().take(12).collect();
    let candidate: String = input.candidate.chars().take(24).collect();
    let max_error = usize::from(input.max_error % 4);

    let dfa = build_dfa(&pattern, max_error);
    let expected = levenshtein(&pattern, &candidate) <= max_error;
    assert_eq!(
        dfa.accepts(&candidate),
        expected,
        "DFA wrong for {:?} vs {:?} at E={}",
        pattern,
        candidate,
        max_error
    );

    if pattern.chars().count() <= 6 {
        let nfa = build_nfa(&pattern, max_error);
        assert_eq!(nfa.accepts(&candidate), expected);
    }
});
