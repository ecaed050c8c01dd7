//! Property tests for the NFA builder and the determinizer.
//!
//! 1. The DFA accepts exactly what the NFA accepts
//! 2. Both accept exactly the strings within the edit budget
//! 3. The DFA is deterministic after conversion

use proptest::prelude::*;
use std::collections::HashSet;

use levtrie::automaton::{walk_graph, Label};
use levtrie::testing::{candidates_around, nfa_verdicts};
use levtrie::{build_dfa, build_nfa};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so random candidates land near the pattern often.
fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,6}").unwrap()
}

fn candidate_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,8}").unwrap()
}

// ============================================================================
// EQUIVALENCE
// ============================================================================

proptest! {
    /// Property: NFA and DFA agree on the pattern, its single edits and on
    /// random strings.
    #[test]
    fn prop_nfa_dfa_agree(
        pattern in pattern_strategy(),
        max_error in 0usize..=3,
        extra in prop::collection::vec(candidate_strategy(), 0..8)
    ) {
        let mut candidates = candidates_around(&pattern, 'e');
        candidates.extend(candidates_around(&format!("{}ee", pattern), 'x'));
        candidates.extend(extra);

        let dfa = build_dfa(&pattern, max_error);
        let nfa = nfa_verdicts(&pattern, max_error, &candidates);
        for (candidate, nfa_says) in candidates.iter().zip(nfa) {
            prop_assert_eq!(
                dfa.accepts(candidate),
                nfa_says,
                "pattern {:?} E={} candidate {:?}",
                pattern, max_error, candidate
            );
        }
    }

    /// Property: acceptance is exactly "distance <= E".
    #[test]
    fn prop_dfa_accepts_within_budget(
        pattern in pattern_strategy(),
        candidate in candidate_strategy(),
        max_error in 0usize..=3
    ) {
        let expected = strsim::levenshtein(&pattern, &candidate) <= max_error;
        prop_assert_eq!(build_dfa(&pattern, max_error).accepts(&candidate), expected);
        prop_assert_eq!(build_nfa(&pattern, max_error).accepts(&candidate), expected);
    }

    /// Property: one target per letter, one wildcard target, no epsilons.
    #[test]
    fn prop_dfa_is_deterministic(pattern in pattern_strategy(), max_error in 0usize..=3) {
        let dfa = build_dfa(&pattern, max_error);
        let walk = walk_graph(&dfa, dfa.len());

        prop_assert_eq!(walk.nodes.len(), dfa.len(), "unreachable states survived");

        let mut seen = HashSet::new();
        for (source, _, label) in &walk.edges {
            prop_assert!(*label != Label::Epsilon);
            prop_assert!(seen.insert((*source, *label)), "two {:?} edges from {}", label, source);
        }
    }
}
