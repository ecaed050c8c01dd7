// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! NFA → DFA conversion: powerset construction with wildcard edges.
//!
//! Each DFA state stands for a [`StateGroup`]: the epsilon-closed set of NFA
//! states the NFA could be in at once. Groups are interned as they are
//! discovered, so a DFA state is materialized the first time its group shows
//! up and every later occurrence resolves to the same id.
//!
//! Wildcards need one extra rule. For a letter that some member state names
//! explicitly, the wildcard targets of *all* members join in too, because "any
//! unit" includes that letter. Letters nobody names take the wildcard-only
//! group. So each DFA state gets:
//!
//! ```text
//!   letter c   → close( ⋃ letter_c targets ∪ ⋃ wildcard targets )
//!   wildcard   → close( ⋃ wildcard targets )
//! ```
//!
//! Two clean-up passes follow. Wildcard edges of non-final states that can only
//! land in a dead sink are dropped, then states nobody can reach any more are
//! removed and the survivors renumbered.

use std::collections::{BTreeSet, HashMap, VecDeque};

use tracing::debug;

use super::dfa::{Dfa, DfaState};
use super::graph::{Nfa, StateId};
use crate::contracts::check_dfa_deterministic;

/// A set of NFA states, kept sorted so equal sets compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateGroup(Vec<StateId>);

impl StateGroup {
    fn from_set(states: BTreeSet<StateId>) -> Self {
        Self(states.into_iter().collect())
    }

    pub fn states(&self) -> &[StateId] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A group accepts when any member does.
    fn is_final(&self, nfa: &Nfa) -> bool {
        self.0.iter().any(|&id| nfa.state(id).is_final())
    }

    fn wildcard_targets(&self, nfa: &Nfa) -> BTreeSet<StateId> {
        self.0
            .iter()
            .flat_map(|&id| nfa.state(id).wildcard_targets().iter().copied())
            .collect()
    }

    /// Every letter named on a letter edge of some member.
    fn letters(&self, nfa: &Nfa) -> BTreeSet<char> {
        self.0
            .iter()
            .flat_map(|&id| nfa.state(id).letters().map(|(letter, _)| letter))
            .collect()
    }

    fn letter_targets(&self, nfa: &Nfa, unit: char) -> BTreeSet<StateId> {
        self.0
            .iter()
            .flat_map(|&id| nfa.state(id).letter_targets(unit).iter().copied())
            .collect()
    }
}

/// Everything reachable from `seeds` through zero or more epsilon edges.
pub fn epsilon_closure(nfa: &Nfa, seeds: impl IntoIterator<Item = StateId>) -> StateGroup {
    let mut closed: BTreeSet<StateId> = BTreeSet::new();
    let mut unchecked: Vec<StateId> = seeds.into_iter().collect();

    while let Some(id) = unchecked.pop() {
        if !closed.insert(id) {
            continue;
        }
        for &next in nfa.state(id).epsilon_targets() {
            if !closed.contains(&next) {
                unchecked.push(next);
            }
        }
    }

    StateGroup::from_set(closed)
}

/// Interns groups as DFA state ids, in discovery order.
struct GroupTable {
    ids: HashMap<StateGroup, StateId>,
    groups: Vec<StateGroup>,
    pending: VecDeque<StateId>,
}

impl GroupTable {
    fn new() -> Self {
        Self {
            ids: HashMap::new(),
            groups: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    fn intern(&mut self, group: StateGroup) -> StateId {
        if let Some(&id) = self.ids.get(&group) {
            return id;
        }
        let id = StateId::from_index(self.groups.len());
        self.groups.push(group.clone());
        self.ids.insert(group, id);
        self.pending.push_back(id);
        id
    }
}

/// Convert `nfa` into an equivalent deterministic automaton.
pub fn determinize(nfa: &Nfa) -> Dfa {
    let mut table = GroupTable::new();
    let mut states: Vec<DfaState> = Vec::new();

    let start = table.intern(epsilon_closure(nfa, [nfa.start()]));

    while let Some(id) = table.pending.pop_front() {
        let group = table.groups[id.index()].clone();
        let any = group.wildcard_targets(nfa);

        let wildcard = table.intern(epsilon_closure(nfa, any.iter().copied()));

        let mut letters = Vec::new();
        for unit in group.letters(nfa) {
            let mut targets = group.letter_targets(nfa, unit);
            targets.extend(any.iter().copied());
            let target = table.intern(epsilon_closure(nfa, targets));
            letters.push((unit, target));
        }

        // Ids are handed out in order, but a state's targets may be interned
        // before the state itself is expanded.
        if states.len() <= id.index() {
            states.resize_with(id.index() + 1, DfaState::default);
        }
        states[id.index()] = DfaState {
            is_final: group.is_final(nfa),
            letters,
            wildcard: Some(wildcard),
        };
    }

    let materialized = states.len();
    prune_dead_wildcards(&mut states);
    let (states, start) = retain_reachable(states, start);

    debug!(
        nfa_states = nfa.len(),
        groups = materialized,
        dfa_states = states.len(),
        max_error = nfa.max_error(),
        "determinized automaton"
    );

    let dfa = Dfa {
        states,
        start,
        max_error: nfa.max_error(),
    };
    check_dfa_deterministic(&dfa);
    dfa
}

/// A dead state accepts nothing and every edge out of it loops back to itself.
fn is_dead(states: &[DfaState], id: StateId) -> bool {
    let state = &states[id.index()];
    !state.is_final
        && state.letters.iter().all(|&(_, target)| target == id)
        && state.wildcard.map_or(true, |target| target == id)
}

/// Drop wildcard edges of non-final states that only lead into a dead sink.
fn prune_dead_wildcards(states: &mut [DfaState]) {
    let dead: Vec<bool> = (0..states.len())
        .map(|i| is_dead(states, StateId::from_index(i)))
        .collect();

    for state in states.iter_mut() {
        if state.is_final {
            continue;
        }
        if let Some(target) = state.wildcard {
            if dead[target.index()] {
                state.wildcard = None;
            }
        }
    }
}

/// Keep only states reachable from `start`, renumbered in BFS order.
fn retain_reachable(states: Vec<DfaState>, start: StateId) -> (Vec<DfaState>, StateId) {
    let mut remap: Vec<Option<StateId>> = vec![None; states.len()];
    let mut order: Vec<StateId> = Vec::with_capacity(states.len());
    let mut queue = VecDeque::from([start]);
    remap[start.index()] = Some(StateId::from_index(0));
    order.push(start);

    while let Some(id) = queue.pop_front() {
        let state = &states[id.index()];
        let targets = state
            .letters
            .iter()
            .map(|&(_, target)| target)
            .chain(state.wildcard);
        for target in targets {
            if remap[target.index()].is_none() {
                remap[target.index()] = Some(StateId::from_index(order.len()));
                order.push(target);
                queue.push_back(target);
            }
        }
    }

    let renumber = |id: StateId| remap[id.index()].unwrap_or(id);
    let kept = order
        .iter()
        .map(|&old| {
            let state = &states[old.index()];
            DfaState {
                is_final: state.is_final,
                letters: state
                    .letters
                    .iter()
                    .map(|&(letter, target)| (letter, renumber(target)))
                    .collect(),
                wildcard: state.wildcard.map(renumber),
            }
        })
        .collect();

    (kept, StateId::from_index(0))
}

impl Nfa {
    /// Shorthand for [`determinize`].
    pub fn determinize(&self) -> Dfa {
        determinize(self)
    }
}
