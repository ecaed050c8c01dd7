//! Property tests for the dictionary indices.

use proptest::prelude::*;
use std::collections::BTreeSet;

use levtrie::contracts::check_compact_layout;
use levtrie::{CompactTrie, DictionaryIndex, PointerTrie};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cé]{0,5}").unwrap()
}

proptest! {
    /// Property: insertion order does not matter for the compact trie.
    #[test]
    fn prop_compact_ignores_input_order(words in prop::collection::vec(word_strategy(), 0..30)) {
        let mut sorted = words.clone();
        sorted.sort();

        let from_sorted = CompactTrie::from_words(&sorted);
        let from_unsorted = CompactTrie::from_words(&words);
        prop_assert_eq!(&from_sorted, &from_unsorted);
        check_compact_layout(&from_unsorted);
    }

    /// Property: every inserted word is found, counts match the distinct set.
    #[test]
    fn prop_every_word_is_contained(words in prop::collection::vec(word_strategy(), 0..30)) {
        let distinct: BTreeSet<&str> = words.iter().map(String::as_str).collect();
        let compact = CompactTrie::from_words(&words);
        let pointer = PointerTrie::from_words(&words);

        prop_assert_eq!(compact.word_count(), distinct.len());
        prop_assert_eq!(pointer.word_count(), distinct.len());
        prop_assert_eq!(compact.node_count(), pointer.node_count());
        for word in &distinct {
            prop_assert!(compact.contains(word));
            prop_assert!(pointer.contains(word));
        }
    }

    /// Property: find_word is the longest indexed prefix.
    #[test]
    fn prop_find_word_is_longest_prefix(
        words in prop::collection::vec(word_strategy(), 0..20),
        probe in word_strategy()
    ) {
        let trie = CompactTrie::from_words(&words);
        let units: Vec<char> = probe.chars().collect();
        let expected = (1..=units.len())
            .rev()
            .find(|&n| {
                let prefix: String = units[..n].iter().collect();
                words.contains(&prefix)
            })
            .unwrap_or(0);
        prop_assert_eq!(trie.find_word(&probe), expected);
    }
}
