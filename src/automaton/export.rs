// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Graph traversal for visualization, plus a Graphviz DOT renderer.
//!
//! [`walk_graph`] visits every state reachable from the start exactly once and
//! reports each `(source, target, label)` edge exactly once. It knows nothing
//! about output formats; [`write_dot`] is one consumer of it.
//!
//! ```text
//! digraph {
//! n0[shape=circle, style=filled, color=gray88, label=" "];
//! n1[shape=circle, style=filled, color=palegreen, label="F"];
//! n0 -> n1[label="a", fontsize=12, labeldistance=10, penwidth=2, color=black];
//! }
//! ```

use std::collections::HashMap;
use std::io::{self, Write};

use super::dfa::Dfa;
use super::graph::{Label, Nfa, StateId};

/// Read-only view of an automaton as a labelled graph.
pub trait AutomatonGraph {
    fn start_state(&self) -> StateId;
    fn is_final_state(&self, id: StateId) -> bool;
    fn outgoing(&self, id: StateId) -> Vec<(Label, StateId)>;
}

impl AutomatonGraph for Nfa {
    fn start_state(&self) -> StateId {
        self.start()
    }

    fn is_final_state(&self, id: StateId) -> bool {
        self.state(id).is_final()
    }

    fn outgoing(&self, id: StateId) -> Vec<(Label, StateId)> {
        self.edges(id)
    }
}

impl AutomatonGraph for Dfa {
    fn start_state(&self) -> StateId {
        self.start()
    }

    fn is_final_state(&self, id: StateId) -> bool {
        self.is_final(id)
    }

    fn outgoing(&self, id: StateId) -> Vec<(Label, StateId)> {
        self.edges(id)
    }
}

/// Everything reachable from the start state, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphWalk {
    pub nodes: Vec<(StateId, bool)>,
    pub edges: Vec<(StateId, StateId, Label)>,
}

/// Depth-first walk from the start state with an explicit stack.
///
/// An empty automaton yields an empty walk.
pub fn walk_graph<G: AutomatonGraph + ?Sized>(graph: &G, state_count: usize) -> GraphWalk {
    let mut walk = GraphWalk::default();
    if state_count == 0 {
        return walk;
    }

    let mut visited = vec![false; state_count];
    let mut stack = vec![graph.start_state()];

    while let Some(id) = stack.pop() {
        if std::mem::replace(&mut visited[id.index()], true) {
            continue;
        }
        walk.nodes.push((id, graph.is_final_state(id)));

        let outgoing = graph.outgoing(id);
        // Reversed so the first edge is explored first
        for &(_, target) in outgoing.iter().rev() {
            if !visited[target.index()] {
                stack.push(target);
            }
        }
        walk.edges
            .extend(outgoing.into_iter().map(|(label, target)| (id, target, label)));
    }

    walk
}

/// Render `walk` as a DOT digraph.
///
/// Nodes are numbered `n0, n1, ...` in discovery order so the output does not
/// depend on internal state ids.
pub fn write_dot<W: Write>(walk: &GraphWalk, out: &mut W) -> io::Result<()> {
    let names: HashMap<StateId, usize> = walk
        .nodes
        .iter()
        .enumerate()
        .map(|(n, &(id, _))| (id, n))
        .collect();

    writeln!(out, "digraph {{")?;
    for (n, &(_, is_final)) in walk.nodes.iter().enumerate() {
        let (color, label) = if is_final {
            ("palegreen", "F")
        } else {
            ("gray88", " ")
        };
        writeln!(
            out,
            "n{}[shape=circle, style=filled, color={}, label=\"{}\"];",
            n, color, label
        )?;
    }
    for (source, target, label) in &walk.edges {
        let (Some(source), Some(target)) = (names.get(source), names.get(target)) else {
            continue;
        };
        writeln!(
            out,
            "n{} -> n{}[label=\"{}\", fontsize=12, labeldistance=10, penwidth=2, color=black];",
            source, target, label
        )?;
    }
    writeln!(out, "}}")
}

/// DOT text for a determinized automaton.
pub fn dfa_to_dot(dfa: &Dfa) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_dot(&walk_graph(dfa, dfa.len()), &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

/// DOT text for a non-deterministic automaton.
pub fn nfa_to_dot(nfa: &Nfa) -> String {
    let mut out = Vec::new();
    let _ = write_dot(&walk_graph(nfa, nfa.len()), &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::builder::build_nfa;
    use std::collections::HashSet;

    #[test]
    fn test_walk_visits_each_state_once() {
        let nfa = build_nfa("ab", 1);
        let walk = walk_graph(&nfa, nfa.len());

        let ids: HashSet<StateId> = walk.nodes.iter().map(|&(id, _)| id).collect();
        assert_eq!(ids.len(), walk.nodes.len());
        assert_eq!(walk.nodes.len(), nfa.len());
        assert_eq!(walk.nodes[0].0, nfa.start());
    }

    #[test]
    fn test_walk_reports_each_edge_once() {
        let nfa = build_nfa("ab", 1);
        let walk = walk_graph(&nfa, nfa.len());

        let expected: usize = (0..nfa.len())
            .map(|i| nfa.edges(StateId::from_index(i)).len())
            .sum();
        assert_eq!(walk.edges.len(), expected);

        let unique: HashSet<_> = walk.edges.iter().collect();
        assert_eq!(unique.len(), walk.edges.len());
        assert!(walk.edges.iter().any(|(_, _, l)| *l == Label::Epsilon));
    }

    #[test]
    fn test_dot_shapes_and_labels() {
        let dot = dfa_to_dot(&build_nfa("a", 0).determinize());
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(dot.contains("shape=circle"));
        assert!(dot.contains("color=palegreen, label=\"F\""));
        assert!(dot.contains("n0 -> n1[label=\"a\""));
    }

    #[test]
    fn test_nfa_dot_marks_wildcards_and_epsilons() {
        let dot = nfa_to_dot(&build_nfa("a", 1));
        assert!(dot.contains("label=\"*\""));
        assert!(dot.contains("label=\"Eps\""));
    }

    #[test]
    fn test_empty_graph() {
        let nfa = Nfa::new(0);
        assert_eq!(walk_graph(&nfa, 0), GraphWalk::default());
        assert_eq!(nfa_to_dot(&nfa), "digraph {\n}\n");
    }
}
