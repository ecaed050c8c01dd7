// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy lookup: walk a Levenshtein DFA and a trie in lockstep.
//!
//! # The walk
//!
//! ```text
//!   trie node ──unit──▶ child            (every child of the node)
//!   dfa state ──unit──▶ step(state, unit) (letter edge, else wildcard, else stop)
//! ```
//!
//! A worklist holds `(node, state, prefix)` triples, seeded with
//! `(root, start, "")`. For every child whose unit the DFA can step on, the
//! child triple is pushed; if the child is terminal and the new state final,
//! the prefix is a match. A branch dies the moment the DFA has no edge, which
//! is what makes this faster than running the DP on every word.
//!
//! The starting pair counts too: a terminal start node with a final start
//! state matches the empty suffix. That matters when the walk starts mid-trie
//! (the split search), less so at the root.
//!
//! # Split search
//!
//! With a budget of exactly 2 and an index of reversed words, a query is cut in
//! half and the two edits are distributed over the halves. See [`split`].

pub mod split;

#[cfg(feature = "parallel")]
pub mod parallel;

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::automaton::{build_dfa, AutomatonCache, Dfa, StateId};
use crate::dictionary::{DictionaryIndex, TrieCursor};
use crate::error::{Error, Result};

/// Depth-first lockstep walk from `(start, dfa.start())`.
///
/// `visit` sees every pair the walk reaches, the starting pair included, with
/// the units consumed since `start`.
pub fn walk<C, F>(start: C, dfa: &Dfa, mut visit: F)
where
    C: TrieCursor,
    F: FnMut(C, StateId, &str),
{
    if dfa.is_empty() {
        return;
    }
    visit(start, dfa.start(), "");

    let mut stack: Vec<(C, StateId, String)> = vec![(start, dfa.start(), String::new())];
    while let Some((node, state, prefix)) = stack.pop() {
        for (unit, child) in node.children() {
            let Some(next) = dfa.step(state, unit) else {
                continue;
            };
            let mut word = String::with_capacity(prefix.len() + unit.len_utf8());
            word.push_str(&prefix);
            word.push(unit);

            visit(child, next, &word);
            stack.push((child, next, word));
        }
    }
}

/// Every word below `start` the automaton accepts, as suffixes relative to `start`.
pub fn find_matches_from<C: TrieCursor>(start: C, dfa: &Dfa) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    walk(start, dfa, |node, state, suffix| {
        if node.is_terminal() && dfa.is_final(state) {
            found.insert(suffix.to_string());
        }
    });
    found
}

/// Every word of `index` the automaton accepts.
pub fn find_matches<I: DictionaryIndex>(index: &I, dfa: &Dfa) -> BTreeSet<String> {
    find_matches_from(index.root(), dfa)
}

/// Fuzzy lookups against one dictionary with a fixed error budget.
///
/// ```ignore
/// let words = read_word_list("words.txt")?;
/// let forward = CompactTrie::from_words(&words);
/// let backward = CompactTrie::from_words(&reversed_words(&words));
/// let cache = AutomatonCache::new();
///
/// let matcher = FuzzyMatcher::new(&forward, 2)
///     .with_reversed(&backward)?
///     .with_cache(&cache);
/// let hits = matcher.find_matches("kitten");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher<'d, I> {
    index: &'d I,
    reversed: Option<&'d I>,
    cache: Option<&'d AutomatonCache>,
    max_error: usize,
}

impl<'d, I: DictionaryIndex> FuzzyMatcher<'d, I> {
    pub fn new(index: &'d I, max_error: usize) -> Self {
        Self {
            index,
            reversed: None,
            cache: None,
            max_error,
        }
    }

    /// Enable the split search. `reversed` must index the same words, each
    /// reversed by `char`.
    ///
    /// Fails unless the budget is exactly 2.
    pub fn with_reversed(mut self, reversed: &'d I) -> Result<Self> {
        if self.max_error != 2 {
            return Err(Error::ReversedIndexBudget {
                max_error: self.max_error,
            });
        }
        self.reversed = Some(reversed);
        Ok(self)
    }

    pub fn with_cache(mut self, cache: &'d AutomatonCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn max_error(&self) -> usize {
        self.max_error
    }

    pub fn index(&self) -> &'d I {
        self.index
    }

    pub fn is_split(&self) -> bool {
        self.reversed.is_some()
    }

    /// The automaton for `(word, max_error)`, from the cache when there is one.
    pub fn automaton(&self, word: &str, max_error: usize) -> Arc<Dfa> {
        match self.cache {
            Some(cache) => cache.get_or_build(word, max_error),
            None => Arc::new(build_dfa(word, max_error)),
        }
    }

    /// Every dictionary word within the budget of `word`.
    ///
    /// Uses the split search when a reversed index is configured.
    pub fn find_matches(&self, word: &str) -> BTreeSet<String> {
        let found = match self.reversed {
            Some(reversed) => split::find_matches_split(self, reversed, word),
            None => {
                let dfa = self.automaton(word, self.max_error);
                find_matches(self.index, &dfa)
            }
        };
        debug!(
            query = word,
            max_error = self.max_error,
            split = self.is_split(),
            matches = found.len(),
            "matched query"
        );
        found
    }
}
