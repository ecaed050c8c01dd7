// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Split search for a budget of two edits.
//!
//! Cut the query into halves `A` (first `len / 2` units) and `B` (the rest).
//! A dictionary word within two edits splits as `A' B'` with
//! `d(A, A') + d(B, B') <= 2`, and one of three cases holds:
//!
//! ```text
//!   case   d(A,A')  d(B,B')   how
//!   ────   ───────  ───────   ───────────────────────────────────────────────
//!    1        0       ≤ 2     locate A exactly, budget-2 walk for B below it
//!    2       ≤ 2       0      locate rev(B) in the reversed index,
//!                             budget-2 walk for rev(A) below it, reverse back
//!    3        1        1      budget-1 walk for A from the root, then a
//!                             budget-1 walk for B below every node it accepts
//! ```
//!
//! Exact location costs one step per unit, and two budget-1 automata explore
//! far fewer states than one budget-2 automaton over the whole word. Cases
//! overlap; the union is what counts.

use std::collections::BTreeSet;

use super::{find_matches_from, walk, FuzzyMatcher};
use crate::dictionary::DictionaryIndex;

/// Split `word` into its two halves, by `char`.
pub fn halves(word: &str) -> (&str, &str) {
    let mid = word.chars().count() / 2;
    let at = word
        .char_indices()
        .nth(mid)
        .map_or(word.len(), |(offset, _)| offset);
    word.split_at(at)
}

fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

pub(super) fn find_matches_split<I: DictionaryIndex>(
    matcher: &FuzzyMatcher<'_, I>,
    reversed: &I,
    word: &str,
) -> BTreeSet<String> {
    let (head, tail) = halves(word);
    let mut found = BTreeSet::new();

    // Case 1: head exact, tail within two
    if let Some(node) = matcher.index.locate(head) {
        let dfa = matcher.automaton(tail, 2);
        for suffix in find_matches_from(node, &dfa) {
            found.insert(format!("{}{}", head, suffix));
        }
    }

    // Case 2: tail exact, head within two, both searched backwards
    if let Some(node) = reversed.locate(&reverse(tail)) {
        let dfa = matcher.automaton(&reverse(head), 2);
        for suffix in find_matches_from(node, &dfa) {
            found.insert(format!("{}{}", reverse(&suffix), tail));
        }
    }

    // Case 3: one edit on each side
    let head_dfa = matcher.automaton(head, 1);
    let mut partials = Vec::new();
    walk(matcher.index.root(), &head_dfa, |node, state, prefix| {
        if head_dfa.is_final(state) {
            partials.push((node, prefix.to_string()));
        }
    });

    let tail_dfa = matcher.automaton(tail, 1);
    for (node, prefix) in partials {
        for suffix in find_matches_from(node, &tail_dfa) {
            found.insert(format!("{}{}", prefix, suffix));
        }
    }

    found
}
