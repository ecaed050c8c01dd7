//! Property-based tests using proptest.
//!
//! These tests check that the automata, the tries and the matcher agree with
//! independent oracles for randomly generated inputs.

mod common;

#[path = "property/automaton_equivalence.rs"]
mod automaton_equivalence;

#[path = "property/matching_oracle.rs"]
mod matching_oracle;

#[path = "property/trie_invariants.rs"]
mod trie_invariants;
