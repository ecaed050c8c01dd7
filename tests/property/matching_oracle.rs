//! Differential tests: the lockstep walk against brute-force oracles.

use proptest::prelude::*;

use super::common::strsim_oracle;
use levtrie::{
    accepted_words, reversed_words, trie_search, AutomatonCache, CompactTrie, DictionaryIndex,
    FuzzyMatcher, PointerTrie,
};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,6}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

// ============================================================================
// MATCHER PROPERTIES
// ============================================================================

proptest! {
    /// Property: a word is found iff its distance to the query is within budget.
    #[test]
    fn prop_matches_equal_oracle(
        words in dictionary_strategy(),
        query in word_strategy(),
        max_error in 0usize..=3
    ) {
        let trie = CompactTrie::from_words(&words);
        let found = FuzzyMatcher::new(&trie, max_error).find_matches(&query);
        prop_assert_eq!(found, strsim_oracle(&words, &query, max_error));
    }

    /// Property: the split search returns what the full search returns.
    #[test]
    fn prop_split_equals_full(words in dictionary_strategy(), query in word_strategy()) {
        let forward = CompactTrie::from_words(&words);
        let backward = CompactTrie::from_words(&reversed_words(&words));

        let full = FuzzyMatcher::new(&forward, 2).find_matches(&query);
        let split = FuzzyMatcher::new(&forward, 2)
            .with_reversed(&backward)
            .unwrap()
            .find_matches(&query);
        prop_assert_eq!(split, full);
    }

    /// Property: switching the cache on changes nothing but speed.
    #[test]
    fn prop_cache_is_transparent(
        words in dictionary_strategy(),
        queries in prop::collection::vec(word_strategy(), 1..6),
        max_error in 1usize..=2
    ) {
        let trie = CompactTrie::from_words(&words);
        let cache = AutomatonCache::new();
        let plain = FuzzyMatcher::new(&trie, max_error);
        let cached = FuzzyMatcher::new(&trie, max_error).with_cache(&cache);

        // Twice, so the second round is served from the cache
        for _ in 0..2 {
            for query in &queries {
                prop_assert_eq!(plain.find_matches(query), cached.find_matches(query));
            }
        }
        prop_assert!(cache.stats().hits >= queries.len());
    }

    /// Property: both trie representations give the same matches.
    #[test]
    fn prop_pointer_and_compact_agree(
        words in dictionary_strategy(),
        query in word_strategy(),
        max_error in 0usize..=2
    ) {
        let compact = CompactTrie::from_words(&words);
        let pointer = PointerTrie::from_words(&words);
        prop_assert_eq!(
            FuzzyMatcher::new(&compact, max_error).find_matches(&query),
            FuzzyMatcher::new(&pointer, max_error).find_matches(&query)
        );
    }

    /// Property: the DP baselines agree with the oracle too.
    #[test]
    fn prop_dp_baselines_equal_oracle(
        words in dictionary_strategy(),
        query in word_strategy(),
        max_error in 0usize..=3
    ) {
        let expected = strsim_oracle(&words, &query, max_error);
        let trie = CompactTrie::from_words(&words);
        prop_assert_eq!(&trie_search(trie.root(), &query, max_error), &expected);
        prop_assert_eq!(&accepted_words(&words, &query, max_error), &expected);
    }
}
