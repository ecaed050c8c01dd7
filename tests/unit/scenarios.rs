//! The worked examples: small dictionaries with known answers.

use super::common::{set_of, strsim_oracle, ANIMALS, SPELLING};
use levtrie::dictionary::TrieCursor;
use levtrie::{
    build_dfa, levenshtein, reversed_words, AutomatonCache, CompactTrie, DictionaryIndex,
    FuzzyMatcher, PointerTrie,
};

// ============================================================================
// MATCHING
// ============================================================================

#[test]
fn test_cat_within_one_edit() {
    let compact = CompactTrie::from_words(ANIMALS);
    let pointer = PointerTrie::from_words(ANIMALS);
    let expected = set_of(&["cat", "cats", "car"]);

    assert_eq!(FuzzyMatcher::new(&compact, 1).find_matches("cat"), expected);
    assert_eq!(FuzzyMatcher::new(&pointer, 1).find_matches("cat"), expected);
}

#[test]
fn test_cat_within_two_edits() {
    let compact = CompactTrie::from_words(ANIMALS);
    let expected = set_of(&["cat", "cats", "car", "care"]);

    assert_eq!(FuzzyMatcher::new(&compact, 2).find_matches("cat"), expected);

    let reversed = CompactTrie::from_words(&reversed_words(ANIMALS));
    let split = FuzzyMatcher::new(&compact, 2)
        .with_reversed(&reversed)
        .unwrap()
        .find_matches("cat");
    assert_eq!(split, expected);
}

#[test]
fn test_spelling_dictionary_against_oracle() {
    let trie = CompactTrie::from_words(SPELLING);
    let reversed = CompactTrie::from_words(&reversed_words(SPELLING));
    let cache = AutomatonCache::new();

    for max in 1..=3 {
        let matcher = FuzzyMatcher::new(&trie, max).with_cache(&cache);
        for query in ["kitten", "helo", "wrd", "aple", "mellow", "x"] {
            assert_eq!(
                matcher.find_matches(query),
                strsim_oracle(SPELLING, query, max),
                "query {:?} max {}",
                query,
                max
            );
        }
    }

    let split = FuzzyMatcher::new(&trie, 2)
        .with_reversed(&reversed)
        .unwrap()
        .with_cache(&cache);
    for query in ["kitten", "sittin", "wordy", "yelow"] {
        assert_eq!(split.find_matches(query), strsim_oracle(SPELLING, query, 2));
    }
}

// ============================================================================
// DISTANCE
// ============================================================================

#[test]
fn test_kitten_sitting() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(strsim::levenshtein("kitten", "sitting"), 3);
}

// ============================================================================
// AUTOMATON
// ============================================================================

#[test]
fn test_empty_pattern_accepts_single_units() {
    let dfa = build_dfa("", 1);
    assert!(dfa.accepts(""));
    for unit in ['a', 'z', 'é', '7'] {
        assert!(dfa.accepts(&unit.to_string()), "should accept {:?}", unit);
    }
    assert!(!dfa.accepts("ab"));
    assert!(!dfa.accepts("zz"));
}

// ============================================================================
// TRIE
// ============================================================================

#[test]
fn test_compact_trie_shape() {
    let trie = CompactTrie::from_words(&["a", "ab"]);
    let root = trie.root();
    assert!(!root.is_terminal());

    let a = root.child('a').expect("child on 'a'");
    assert!(a.is_terminal());
    let b = a.child('b').expect("child on 'b'");
    assert!(b.is_terminal());
    assert_eq!(b.children().count(), 0);

    assert_eq!(trie.find_word("ab"), 2);
    assert_eq!(trie.find_word("ax"), 1);
}

#[test]
fn test_unsorted_input_same_matches() {
    let mut shuffled: Vec<&str> = SPELLING.to_vec();
    shuffled.reverse();
    let sorted = CompactTrie::from_words(SPELLING);
    let unsorted = CompactTrie::from_words(&shuffled);

    assert_eq!(sorted, unsorted);
    assert_eq!(
        FuzzyMatcher::new(&sorted, 2).find_matches("word"),
        FuzzyMatcher::new(&unsorted, 2).find_matches("word")
    );
}
