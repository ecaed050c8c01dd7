// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Answer many queries at once.
//!
//! Built automata and tries are immutable, so queries are embarrassingly
//! parallel: `par_iter()` over the query list, one lockstep walk per query. The
//! only shared mutable piece is the automaton cache, which locks per slot.
//! Results come back in query order.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::ProgressBar;
use rayon::prelude::*;

use super::FuzzyMatcher;
use crate::dictionary::DictionaryIndex;

/// Match every query in parallel.
pub fn find_all<I>(matcher: &FuzzyMatcher<'_, I>, queries: &[String]) -> Vec<BTreeSet<String>>
where
    I: DictionaryIndex + Sync,
{
    queries
        .par_iter()
        .map(|query| matcher.find_matches(query))
        .collect()
}

/// Match every query in parallel, ticking `progress` as queries finish.
pub fn find_all_with_progress<I>(
    matcher: &FuzzyMatcher<'_, I>,
    queries: &[String],
    progress: &ProgressBar,
) -> Vec<BTreeSet<String>>
where
    I: DictionaryIndex + Sync,
{
    let counter = AtomicUsize::new(0);
    let total = queries.len();

    queries
        .par_iter()
        .map(|query| {
            let found = matcher.find_matches(query);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 100 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }
            found
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::AutomatonCache;
    use crate::dictionary::CompactTrie;
    use crate::testing::ANIMALS;

    #[test]
    fn test_parallel_matches_sequential() {
        let trie = CompactTrie::from_words(ANIMALS);
        let cache = AutomatonCache::new();
        let matcher = FuzzyMatcher::new(&trie, 1).with_cache(&cache);
        let queries: Vec<String> = ["cat", "dog", "cat", "bird", "care"]
            .iter()
            .map(|q| q.to_string())
            .collect();

        let sequential: Vec<_> = queries.iter().map(|q| matcher.find_matches(q)).collect();
        assert_eq!(find_all(&matcher, &queries), sequential);
        assert_eq!(
            find_all_with_progress(&matcher, &queries, &ProgressBar::hidden()),
            sequential
        );
    }
}
