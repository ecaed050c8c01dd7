// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein automata.
//!
//! # Pipeline
//!
//! ```text
//! pattern, E ──▶ build_nfa ──▶ Nfa ──▶ determinize ──▶ Dfa ──▶ matching
//!                 (grid)              (powerset,
//!                                      prune, compact)
//! ```
//!
//! The NFA is cheap to build but expensive to run: every step fans out over
//! several states. The DFA is built once per `(pattern, E)` pair and then
//! stepped one unit at a time while walking the dictionary trie. Repeated
//! patterns can go through [`AutomatonCache`].
//!
//! Only [`Dfa`] has a `step` method. An [`Nfa`] cannot be handed to the
//! matcher by mistake.

pub mod builder;
pub mod cache;
pub mod determinize;
pub mod dfa;
pub mod export;
pub mod graph;

pub use builder::build_nfa;
pub use cache::{AutomatonCache, CacheStats};
pub use determinize::{determinize, epsilon_closure, StateGroup};
pub use dfa::{Dfa, DfaState};
pub use export::{dfa_to_dot, nfa_to_dot, walk_graph, write_dot, AutomatonGraph, GraphWalk};
pub use graph::{Label, Nfa, NfaState, StateId};

/// Build and determinize in one go.
pub fn build_dfa(pattern: &str, max_error: usize) -> Dfa {
    build_nfa(pattern, max_error).determinize()
}
