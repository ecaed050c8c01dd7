// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! State graph primitives shared by the NFA and the DFA.
//!
//! States live in a flat arena and refer to each other by [`StateId`], so the
//! graph can be as cyclic as it likes without anybody owning anybody else.
//! A state's outgoing edges come in three flavors:
//!
//! ```text
//!   Letter(c)  consume exactly `c`
//!   Wildcard   consume any single unit (insertion / substitution)
//!   Epsilon    consume nothing         (deletion, NFA only)
//! ```

use std::fmt;

/// Index of a state inside its automaton's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) u32);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        StateId(index as u32)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Letter(char),
    Wildcard,
    Epsilon,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Letter(c) => write!(f, "{}", c),
            Label::Wildcard => f.write_str("*"),
            Label::Epsilon => f.write_str("Eps"),
        }
    }
}

/// A state of the non-deterministic automaton.
///
/// Any edge kind may fan out to several targets.
#[derive(Debug, Clone, Default)]
pub struct NfaState {
    pub(crate) is_final: bool,
    /// One entry per distinct letter, in insertion order.
    pub(crate) letters: Vec<(char, Vec<StateId>)>,
    pub(crate) wildcard: Vec<StateId>,
    pub(crate) epsilon: Vec<StateId>,
}

impl NfaState {
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Targets of the letter edge for `unit` (empty when absent).
    pub fn letter_targets(&self, unit: char) -> &[StateId] {
        self.letters
            .iter()
            .find(|(letter, _)| *letter == unit)
            .map(|(_, targets)| targets.as_slice())
            .unwrap_or(&[])
    }

    pub fn letters(&self) -> impl Iterator<Item = (char, &[StateId])> + '_ {
        self.letters
            .iter()
            .map(|(letter, targets)| (*letter, targets.as_slice()))
    }

    pub fn wildcard_targets(&self) -> &[StateId] {
        &self.wildcard
    }

    pub fn epsilon_targets(&self) -> &[StateId] {
        &self.epsilon
    }
}

/// Non-deterministic automaton: an arena of [`NfaState`]s plus a start state.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub(crate) states: Vec<NfaState>,
    pub(crate) start: StateId,
    pub(crate) max_error: usize,
}

impl Nfa {
    /// Empty automaton. The first state added becomes the start state.
    pub fn new(max_error: usize) -> Self {
        Self {
            states: Vec::new(),
            start: StateId(0),
            max_error,
        }
    }

    pub fn add_state(&mut self, is_final: bool) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(NfaState {
            is_final,
            ..NfaState::default()
        });
        id
    }

    /// Add an edge, merging it into an existing edge with the same label.
    pub fn add_transition(&mut self, from: StateId, label: Label, to: StateId) {
        let state = &mut self.states[from.index()];
        let targets = match label {
            Label::Letter(unit) => {
                match state.letters.iter().position(|(letter, _)| *letter == unit) {
                    Some(slot) => &mut state.letters[slot].1,
                    None => {
                        state.letters.push((unit, Vec::new()));
                        let last = state.letters.len() - 1;
                        &mut state.letters[last].1
                    }
                }
            }
            Label::Wildcard => &mut state.wildcard,
            Label::Epsilon => &mut state.epsilon,
        };
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    pub fn set_start(&mut self, start: StateId) {
        self.start = start;
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn max_error(&self) -> usize {
        self.max_error
    }

    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id.index()]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All outgoing edges of `id`, one entry per (label, target) pair.
    pub fn edges(&self, id: StateId) -> Vec<(Label, StateId)> {
        let state = self.state(id);
        let mut edges = Vec::new();
        for (letter, targets) in &state.letters {
            edges.extend(targets.iter().map(|&t| (Label::Letter(*letter), t)));
        }
        edges.extend(state.wildcard.iter().map(|&t| (Label::Wildcard, t)));
        edges.extend(state.epsilon.iter().map(|&t| (Label::Epsilon, t)));
        edges
    }
}
