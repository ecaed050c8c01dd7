//! Graph export of built automata.

use levtrie::automaton::{dfa_to_dot, nfa_to_dot, walk_graph, write_dot, Label};
use levtrie::{build_dfa, build_nfa};
use std::collections::HashSet;

#[test]
fn test_dfa_walk_covers_every_state() {
    let dfa = build_dfa("kitten", 2);
    let walk = walk_graph(&dfa, dfa.len());

    assert_eq!(walk.nodes.len(), dfa.len());
    let finals = walk.nodes.iter().filter(|(_, is_final)| *is_final).count();
    assert!(finals > 0);

    // Deterministic: one target per (source, label)
    let mut seen = HashSet::new();
    for (source, _, label) in &walk.edges {
        assert!(seen.insert((*source, *label)), "duplicate edge {:?} from {}", label, source);
        assert_ne!(*label, Label::Epsilon);
    }
}

#[test]
fn test_dot_node_and_edge_counts() {
    let nfa = build_nfa("ab", 1);
    let dot = nfa_to_dot(&nfa);
    let walk = walk_graph(&nfa, nfa.len());

    let nodes = dot.lines().filter(|l| l.contains("shape=circle")).count();
    let edges = dot.lines().filter(|l| l.contains(" -> ")).count();
    assert_eq!(nodes, walk.nodes.len());
    assert_eq!(edges, walk.edges.len());
}

#[test]
fn test_write_dot_into_file() {
    let dfa = build_dfa("cat", 1);
    let file = tempfile::NamedTempFile::new().unwrap();
    {
        let mut out = std::io::BufWriter::new(std::fs::File::create(file.path()).unwrap());
        write_dot(&walk_graph(&dfa, dfa.len()), &mut out).unwrap();
    }
    let written = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, dfa_to_dot(&dfa));
    assert!(written.contains("label=\"F\""));
}
