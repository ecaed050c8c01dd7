// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pointer trie: every node owns its children.
//!
//! The straightforward representation. Children sit in a `BTreeMap` so they
//! come out in letter order, same as the compact trie, which keeps results of
//! the two representations comparable step for step. Words can be inserted in
//! any order and at any time.

use std::collections::BTreeMap;

use tracing::debug;

use super::{DictionaryIndex, TrieCursor};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerNode {
    terminal: bool,
    children: BTreeMap<char, PointerNode>,
}

impl<'a> TrieCursor for &'a PointerNode {
    #[inline]
    fn is_terminal(self) -> bool {
        self.terminal
    }

    fn children(self) -> impl Iterator<Item = (char, Self)> {
        self.children.iter().map(|(&unit, node)| (unit, node))
    }

    #[inline]
    fn child(self, unit: char) -> Option<Self> {
        self.children.get(&unit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerTrie {
    root: PointerNode,
    words: usize,
    nodes: usize,
}

impl PointerTrie {
    pub fn new() -> Self {
        Self {
            root: PointerNode::default(),
            words: 0,
            nodes: 1,
        }
    }

    /// Insert `word`. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut created = 0;
        let mut node = &mut self.root;
        for unit in word.chars() {
            node = node.children.entry(unit).or_insert_with(|| {
                created += 1;
                PointerNode::default()
            });
        }
        self.nodes += created;
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.words += 1;
        true
    }
}

impl Default for PointerTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryIndex for PointerTrie {
    type Node<'a> = &'a PointerNode;

    fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut trie = PointerTrie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        debug!(
            words = trie.words,
            nodes = trie.nodes,
            "built pointer trie"
        );
        trie
    }

    fn root(&self) -> &PointerNode {
        &self.root
    }

    fn word_count(&self) -> usize {
        self.words
    }

    fn node_count(&self) -> usize {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_duplicates() {
        let mut trie = PointerTrie::new();
        assert!(trie.insert("cat"));
        assert!(trie.insert("car"));
        assert!(!trie.insert("cat"));
        assert_eq!(trie.word_count(), 2);
        // root, c, a, t, r
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_children_in_letter_order() {
        let trie = PointerTrie::from_words(&["b", "c", "a"]);
        let letters: Vec<char> = trie.root().children().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let trie = PointerTrie::from_words(&["hello"]);
        let hell = trie.locate("hell");
        assert!(hell.is_some_and(|node| !node.is_terminal()));
        assert!(trie.contains("hello"));
    }

    #[test]
    fn test_empty_trie() {
        let trie = PointerTrie::from_words::<&str>(&[]);
        assert_eq!(trie.word_count(), 0);
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.root().is_terminal());
        assert_eq!(trie.root().children().count(), 0);
    }
}
