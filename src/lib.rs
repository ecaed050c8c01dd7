// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy dictionary lookup with Levenshtein automata.
//!
//! Given a query word and an edit budget `E`, find every dictionary word within
//! Levenshtein distance `E`. Instead of computing a distance per word, build an
//! automaton that accepts exactly the strings within `E` edits of the query and
//! walk it over a trie of the dictionary, abandoning a whole subtree as soon as
//! the automaton has nowhere to go.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  automaton   │     │  dictionary  │     │   matching   │
//! │ build_nfa ─▶ │     │ CompactTrie  │     │ FuzzyMatcher │
//! │ determinize  │────▶│ PointerTrie  │────▶│  lockstep    │
//! │  Dfa, cache  │     │ TrieCursor   │     │  walk, split │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         │
//!        ▼                                         ▼
//! ┌──────────────────────────────────────────────────────┐
//! │  contracts (debug checks)     distance (DP baselines) │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use levtrie::{CompactTrie, DictionaryIndex, FuzzyMatcher};
//!
//! let trie = CompactTrie::from_words(&["cat", "cats", "car", "care", "dog"]);
//! let matcher = FuzzyMatcher::new(&trie, 1);
//!
//! let hits: Vec<String> = matcher.find_matches("cat").into_iter().collect();
//! assert_eq!(hits, ["car", "cat", "cats"]);
//! ```

pub mod automaton;
pub mod contracts;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod matching;

#[doc(hidden)]
pub mod testing;

pub use automaton::{build_dfa, build_nfa, AutomatonCache, CacheStats, Dfa, Label, Nfa, StateId};
pub use dictionary::{
    read_word_list, reversed_words, CompactNode, CompactTrie, DictionaryIndex, PointerTrie,
    TrieCursor, TrieKind,
};
pub use distance::{accepted_words, levenshtein, levenshtein_within, trie_search};
pub use error::{Error, Result};
pub use matching::{find_matches, find_matches_from, FuzzyMatcher};
