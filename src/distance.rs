// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dynamic-programming edit distance: the baselines the automata are measured
//! against.
//!
//! - [`levenshtein`]: the textbook two-row DP.
//! - [`levenshtein_within`]: bounded check with early exits.
//! - [`accepted_words`]: scan a whole word list with the bounded check.
//! - [`trie_search`]: run the DP over a trie, one row per node, sharing rows
//!   between words with a common prefix.
//!
//! All of them count `char`s, not bytes.

use std::collections::BTreeSet;

use crate::contracts::check_levenshtein_early_exit;
use crate::dictionary::TrieCursor;

/// Levenshtein distance between `a` and `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Two early exits:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP
///
/// Both are sound: the length difference and every row minimum are lower
/// bounds on the final distance.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    let result = dp[b_len] <= max;
    check_levenshtein_early_exit(a, b, max, result);
    result
}

/// Brute force: every word of `words` within `max` edits of `pattern`.
pub fn accepted_words<S: AsRef<str>>(words: &[S], pattern: &str, max: usize) -> BTreeSet<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| levenshtein_within(pattern, word, max))
        .map(str::to_string)
        .collect()
}

/// Every indexed word within `max` edits of `pattern`, by DP over the trie.
///
/// Each trie node carries the DP row for the prefix spelled so far. A subtree is
/// abandoned as soon as its row minimum exceeds `max`, since appending more
/// units can only keep or grow every entry.
pub fn trie_search<C: TrieCursor>(root: C, pattern: &str, max: usize) -> BTreeSet<String> {
    let pattern: Vec<char> = pattern.chars().collect();
    let first_row: Vec<usize> = (0..=pattern.len()).collect();
    let mut found = BTreeSet::new();

    if root.is_terminal() && first_row[pattern.len()] <= max {
        found.insert(String::new());
    }

    let mut stack: Vec<(C, String, Vec<usize>)> = vec![(root, String::new(), first_row)];

    while let Some((node, prefix, row)) = stack.pop() {
        for (unit, child) in node.children() {
            let mut next = Vec::with_capacity(row.len());
            next.push(row[0] + 1);
            for (j, &pu) in pattern.iter().enumerate() {
                let cost = usize::from(pu != unit);
                let value = (row[j + 1] + 1).min(next[j] + 1).min(row[j] + cost);
                next.push(value);
            }

            let mut word = prefix.clone();
            word.push(unit);

            if child.is_terminal() && next[pattern.len()] <= max {
                found.insert(word.clone());
            }
            if next.iter().min().is_some_and(|&m| m <= max) {
                stack.push((child, word, next));
            }
        }
    }

    found
}
