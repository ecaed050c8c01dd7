// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded-error NFA construction (Schulz & Mihov, 2002).
//!
//! The automaton is a grid of `(E + 1) × (n + 1)` states for a pattern of `n`
//! units and an error budget `E`. State `[k][i]` means "k edits spent, i
//! pattern units matched". Rows are error levels, columns pattern positions:
//!
//! ```text
//!          p0        p1        p2
//!  k=0  [0,0] ───▶ [0,1] ───▶ [0,2] ───▶ [0,3]F
//!         │ ╲ *,ε    │ ╲        │ ╲
//!         *  ╲       *  ╲       *  ╲
//!         ▼   ▼      ▼   ▼      ▼   ▼
//!  k=1  [1,0] ───▶ [1,1] ───▶ [1,2] ───▶ [1,3]F
//! ```
//!
//! Horizontal edges match the pattern letter, vertical wildcard edges insert a
//! candidate unit, diagonal wildcard edges substitute one and diagonal epsilon
//! edges delete a pattern unit. Every state in the last column is final, and the
//! last column keeps its vertical wildcard edges so trailing insertions
//! (`cat` → `cats`) stay within reach.

use std::collections::HashSet;

use super::graph::{Label, Nfa, StateId};

/// Build the NFA accepting every string within `max_error` edits of `pattern`.
///
/// With `max_error == 0` only the `k = 0` row exists and the automaton accepts
/// `pattern` alone.
pub fn build_nfa(pattern: &str, max_error: usize) -> Nfa {
    let units: Vec<char> = pattern.chars().collect();
    let columns = units.len() + 1;
    let mut nfa = Nfa::new(max_error);

    // Row-major: id of [k][i] is k * columns + i
    let mut grid: Vec<StateId> = Vec::with_capacity((max_error + 1) * columns);
    for _k in 0..=max_error {
        for i in 0..columns {
            grid.push(nfa.add_state(i == units.len()));
        }
    }
    let at = |k: usize, i: usize| grid[k * columns + i];

    for k in 0..=max_error {
        for (i, &unit) in units.iter().enumerate() {
            nfa.add_transition(at(k, i), Label::Letter(unit), at(k, i + 1));

            if k < max_error {
                nfa.add_transition(at(k, i), Label::Wildcard, at(k + 1, i));
                nfa.add_transition(at(k, i), Label::Wildcard, at(k + 1, i + 1));
                nfa.add_transition(at(k, i), Label::Epsilon, at(k + 1, i + 1));
            }
        }

        // Insertions after the last pattern unit
        if k < max_error {
            let last = units.len();
            nfa.add_transition(at(k, last), Label::Wildcard, at(k + 1, last));
        }
    }

    nfa.set_start(at(0, 0));
    nfa
}

impl Nfa {
    /// Run the NFA on `candidate`.
    ///
    /// Explores `(state, position)` pairs with an explicit stack; each pair is
    /// expanded at most once, so the cost is bounded by `states × (len + 1)`.
    pub fn accepts(&self, candidate: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let units: Vec<char> = candidate.chars().collect();
        let mut seen: HashSet<(StateId, usize)> = HashSet::new();
        let mut stack = vec![(self.start(), 0usize)];

        while let Some((id, position)) = stack.pop() {
            if !seen.insert((id, position)) {
                continue;
            }
            let state = self.state(id);
            if state.is_final() && position == units.len() {
                return true;
            }

            for &next in state.epsilon_targets() {
                stack.push((next, position));
            }

            if let Some(&unit) = units.get(position) {
                for &next in state.letter_targets(unit) {
                    stack.push((next, position + 1));
                }
                for &next in state.wildcard_targets() {
                    stack.push((next, position + 1));
                }
            }
        }

        false
    }
}
