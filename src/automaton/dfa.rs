// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The determinized automaton.
//!
//! A [`Dfa`] can only be produced by [`determinize`](super::determinize), so
//! holding one is proof that every state has at most one target per letter and
//! at most one wildcard target. That is what makes [`Dfa::step`] safe to call:
//! there is exactly one candidate, never "the first of several".

use super::graph::{Label, StateId};

/// A state of the deterministic automaton.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfaState {
    pub(crate) is_final: bool,
    /// Sorted by letter, letters pairwise distinct.
    pub(crate) letters: Vec<(char, StateId)>,
    pub(crate) wildcard: Option<StateId>,
}

impl DfaState {
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn letters(&self) -> &[(char, StateId)] {
        &self.letters
    }

    pub fn wildcard(&self) -> Option<StateId> {
        self.wildcard
    }

    /// Target for `unit`: the letter edge if there is one, else the wildcard edge.
    #[inline]
    pub fn next(&self, unit: char) -> Option<StateId> {
        match self.letters.binary_search_by_key(&unit, |&(letter, _)| letter) {
            Ok(slot) => Some(self.letters[slot].1),
            Err(_) => self.wildcard,
        }
    }
}

/// Deterministic Levenshtein automaton for one `(pattern, max_error)` pair.
///
/// Immutable once built; share it behind an `Arc` across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    pub(crate) states: Vec<DfaState>,
    pub(crate) start: StateId,
    pub(crate) max_error: usize,
}

impl Dfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn max_error(&self) -> usize {
        self.max_error
    }

    pub fn state(&self, id: StateId) -> &DfaState {
        &self.states[id.index()]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn is_final(&self, id: StateId) -> bool {
        self.states[id.index()].is_final
    }

    /// Follow one unit from `from`. `None` ends the branch.
    #[inline]
    pub fn step(&self, from: StateId, unit: char) -> Option<StateId> {
        self.states[from.index()].next(unit)
    }

    /// Run the whole candidate through the automaton.
    pub fn accepts(&self, candidate: &str) -> bool {
        let mut state = self.start;
        for unit in candidate.chars() {
            match self.step(state, unit) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_final(state)
    }

    /// All outgoing edges of `id`, letters first.
    pub fn edges(&self, id: StateId) -> Vec<(Label, StateId)> {
        let state = self.state(id);
        let mut edges: Vec<(Label, StateId)> = state
            .letters
            .iter()
            .map(|&(letter, target)| (Label::Letter(letter), target))
            .collect();
        if let Some(target) = state.wildcard {
            edges.push((Label::Wildcard, target));
        }
        edges
    }
}
