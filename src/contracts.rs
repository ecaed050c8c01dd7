// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the automata and the tries.
//!
//! Debug-mode assertions that the builders run on their own output. They cost
//! nothing in release builds (`debug_assert!` only) and fail loudly during
//! development and under the test suite.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function               | Property                                         |
//! |---------------------------------|--------------------------------------------------|
//! | `check_dfa_deterministic`       | letters strictly increasing, targets in range    |
//! | `check_sorted_word_list`        | compact builder input is lexicographically sorted |
//! | `check_compact_layout`          | child runs in bounds, child letters distinct     |
//! | `check_levenshtein_early_exit`  | a "within" answer never beats the length gap     |
//!
//! # Usage
//!
//! ```ignore
//! use levtrie::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_dfa_deterministic(&dfa);
//!
//! // In release builds, this is a no-op
//! ```

use crate::automaton::Dfa;
use crate::dictionary::CompactTrie;

// ============================================================================
// AUTOMATON CONTRACTS
// ============================================================================

/// Check that a DFA has at most one target per letter and that every edge
/// lands on an existing state.
///
/// # Panics (debug builds only)
/// Panics if a state's letter list is not strictly increasing or an edge
/// points past the end of the arena.
#[inline]
pub fn check_dfa_deterministic(dfa: &Dfa) {
    if cfg!(not(debug_assertions)) {
        return;
    }
    debug_assert!(
        dfa.start.index() < dfa.states.len().max(1),
        "Contract violation: DFA start {} out of range ({} states)",
        dfa.start,
        dfa.states.len()
    );

    for (i, state) in dfa.states.iter().enumerate() {
        for pair in state.letters.windows(2) {
            debug_assert!(
                pair[0].0 < pair[1].0,
                "Contract violation: state q{} letters not strictly increasing ('{}' then '{}')",
                i,
                pair[0].0,
                pair[1].0
            );
        }
        let targets = state
            .letters
            .iter()
            .map(|&(_, target)| target)
            .chain(state.wildcard);
        for target in targets {
            debug_assert!(
                target.index() < dfa.states.len(),
                "Contract violation: state q{} has edge to {} ({} states)",
                i,
                target,
                dfa.states.len()
            );
        }
    }
}

// ============================================================================
// TRIE CONTRACTS
// ============================================================================

/// Check that words arrive in lexicographic order, duplicates allowed.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair out of order.
#[inline]
pub fn check_sorted_word_list<S: AsRef<str>>(words: &[S]) {
    for (i, pair) in words.windows(2).enumerate() {
        debug_assert!(
            pair[0].as_ref() <= pair[1].as_ref(),
            "Contract violation: word list unsorted at {} ('{}' > '{}')",
            i + 1,
            pair[0].as_ref(),
            pair[1].as_ref()
        );
    }
}

/// Check the array layout of a compact trie.
///
/// Every node's child run must lie inside the edge array, its child letters
/// must be pairwise distinct and every edge must point at an existing node.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_compact_layout(trie: &CompactTrie) {
    if cfg!(not(debug_assertions)) {
        return;
    }
    let nodes = trie.terminal.len();
    debug_assert!(
        trie.first_child.len() == nodes && trie.child_count.len() == nodes,
        "Contract violation: compact trie arrays disagree on node count \
         (first_child {}, child_count {}, terminal {})",
        trie.first_child.len(),
        trie.child_count.len(),
        nodes
    );

    for node in 0..nodes {
        let first = trie.first_child[node] as usize;
        let count = trie.child_count[node] as usize;
        debug_assert!(
            first + count <= trie.edges.len(),
            "Contract violation: node {} child run {}..{} exceeds {} edges",
            node,
            first,
            first + count,
            trie.edges.len()
        );

        let run = &trie.edges[first..(first + count).min(trie.edges.len())];
        for (i, edge) in run.iter().enumerate() {
            debug_assert!(
                (edge.target as usize) < nodes,
                "Contract violation: node {} edge '{}' targets missing node {}",
                node,
                edge.unit,
                edge.target
            );
            debug_assert!(
                run[..i].iter().all(|other| other.unit != edge.unit),
                "Contract violation: node {} has two children labelled '{}'",
                node,
                edge.unit
            );
        }
    }
}

// ============================================================================
// DISTANCE CONTRACTS
// ============================================================================

/// Check the length lower bound on edit distance.
///
/// If `levenshtein_within(a, b, max)` returns true, then `|len(a) - len(b)| <= max`
/// where lengths count characters.
#[inline]
pub fn check_levenshtein_early_exit(a: &str, b: &str, max: usize, result: bool) {
    if !result {
        return;
    }
    let len_diff = a.chars().count().abs_diff(b.chars().count());
    debug_assert!(
        len_diff <= max,
        "Contract violation: levenshtein_within returned true but \
         |len('{}') - len('{}')| = {} > max = {}",
        a.chars().take(10).collect::<String>(),
        b.chars().take(10).collect::<String>(),
        len_diff,
        max
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::build_dfa;
    use crate::dictionary::{CompactTrie, DictionaryIndex};

    #[test]
    fn test_check_dfa_deterministic() {
        // Should not panic
        check_dfa_deterministic(&build_dfa("kitten", 2));
        check_dfa_deterministic(&build_dfa("", 1));
    }

    #[test]
    fn test_check_sorted_word_list() {
        check_sorted_word_list(&["a", "ab", "ab", "b"]);
        check_sorted_word_list::<&str>(&[]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation")]
    fn test_check_sorted_word_list_rejects_unsorted() {
        check_sorted_word_list(&["b", "a"]);
    }

    #[test]
    fn test_check_compact_layout() {
        let trie = CompactTrie::from_words(&["car", "cart", "cat", "dog"]);
        // Should not panic
        check_compact_layout(&trie);
    }

    #[test]
    fn test_check_levenshtein_early_exit() {
        check_levenshtein_early_exit("hello", "hi", 1, false);
        check_levenshtein_early_exit("hello", "hallo", 1, true);
    }
}
