// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoization of determinized automata.
//!
//! Two maps, one for `max_error == 1` and one for `max_error == 2`, with no
//! eviction and no size bound. The split search builds automata for query
//! halves, which repeat across queries. Any other budget is never stored and
//! always rebuilt.
//!
//! Each slot sits behind a `parking_lot::RwLock` so a cache can be shared by
//! matchers running on several threads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::trace;

use super::builder::build_nfa;
use super::dfa::Dfa;

type Slot = RwLock<HashMap<String, Arc<Dfa>>>;

/// Hit/miss counters, read with [`AutomatonCache::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

#[derive(Debug, Default)]
pub struct AutomatonCache {
    one_error: Slot,
    two_errors: Slot,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl AutomatonCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, max_error: usize) -> Option<&Slot> {
        match max_error {
            1 => Some(&self.one_error),
            2 => Some(&self.two_errors),
            _ => None,
        }
    }

    pub fn get(&self, word: &str, max_error: usize) -> Option<Arc<Dfa>> {
        let found = self
            .slot(max_error)
            .and_then(|slot| slot.read().get(word).cloned());

        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(word, max_error, "automaton cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(word, max_error, "automaton cache miss");
        }
        found
    }

    /// Store `automaton`. Silently ignored for budgets other than 1 and 2.
    pub fn put(&self, word: &str, max_error: usize, automaton: Arc<Dfa>) {
        if let Some(slot) = self.slot(max_error) {
            slot.write().insert(word.to_string(), automaton);
        }
    }

    /// Cached automaton for `(word, max_error)`, building and storing it on a miss.
    pub fn get_or_build(&self, word: &str, max_error: usize) -> Arc<Dfa> {
        if let Some(automaton) = self.get(word, max_error) {
            return automaton;
        }
        let automaton = Arc::new(build_nfa(word, max_error).determinize());
        self.put(word, max_error, Arc::clone(&automaton));
        automaton
    }

    pub fn len(&self) -> usize {
        self.one_error.read().len() + self.two_errors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
