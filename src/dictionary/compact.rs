// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compact trie: the whole tree in four flat arrays.
//!
//! ```text
//!   node:         0     1     2     3     4
//!   first_child:  0     1     2     -     -
//!   child_count:  1     1     2     0     0
//!   terminal:     F     F     F     T     T
//!
//!   edges:       [c→1] [a→2] [r→3] [t→4]          words: car, cat
//! ```
//!
//! Node `n`'s children are `edges[first_child[n] .. first_child[n] + child_count[n]]`.
//! Nothing is boxed and nothing points anywhere; a node handle is a `u32`.
//!
//! # Building
//!
//! Runs have to be contiguous, so a node's children must all be appended
//! before any other node gets a child at the same depth. The builder inserts
//! words *layer by layer*: first letter of every word, then the second letter
//! of every word, and so on. On sorted input, words sharing a prefix are
//! neighbours, so within a layer:
//!
//! - all children of one parent are appended back to back, and
//! - a repeated letter can only be the parent's most recent child.
//!
//! Each word keeps a cursor to the node its previous layer reached, so a layer
//! costs one step per word instead of a walk from the root.

use tracing::debug;

use super::{DictionaryIndex, TrieCursor};
use crate::contracts::{check_compact_layout, check_sorted_word_list};

/// One labelled edge in the flat edge array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub unit: char,
    pub target: u32,
}

/// Array-based trie. Build with [`CompactTrie::from_words`] or
/// [`CompactTrieBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactTrie {
    pub(crate) first_child: Vec<u32>,
    pub(crate) child_count: Vec<u32>,
    pub(crate) terminal: Vec<bool>,
    pub(crate) edges: Vec<Edge>,
    words: usize,
}

impl CompactTrie {
    const ROOT: u32 = 0;

    fn with_root() -> Self {
        Self {
            first_child: vec![0],
            child_count: vec![0],
            terminal: vec![false],
            edges: Vec::new(),
            words: 0,
        }
    }

    /// View of node `id`, if it exists.
    pub fn node(&self, id: u32) -> Option<CompactNode<'_>> {
        ((id as usize) < self.terminal.len()).then_some(CompactNode { trie: self, id })
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn run(&self, id: u32) -> &[Edge] {
        let first = self.first_child[id as usize] as usize;
        let count = self.child_count[id as usize] as usize;
        &self.edges[first..first + count]
    }

    fn add_node(&mut self) -> u32 {
        let id = self.terminal.len() as u32;
        self.first_child.push(0);
        self.child_count.push(0);
        self.terminal.push(false);
        id
    }

    /// Append a child edge to `parent`. Only valid while `parent`'s run is the
    /// last run in `edges`, which layered insertion guarantees.
    fn add_child(&mut self, parent: u32, unit: char) -> u32 {
        let child = self.add_node();
        let slot = parent as usize;
        if self.child_count[slot] == 0 {
            self.first_child[slot] = self.edges.len() as u32;
        }
        self.child_count[slot] += 1;
        self.edges.push(Edge {
            unit,
            target: child,
        });
        child
    }

    fn last_child(&self, parent: u32) -> Option<Edge> {
        self.run(parent).last().copied()
    }

    fn mark_terminal(&mut self, id: u32) {
        let flag = &mut self.terminal[id as usize];
        if !*flag {
            *flag = true;
            self.words += 1;
        }
    }
}

/// Handle to one node of a [`CompactTrie`].
#[derive(Debug, Clone, Copy)]
pub struct CompactNode<'a> {
    trie: &'a CompactTrie,
    id: u32,
}

impl<'a> CompactNode<'a> {
    pub fn id(self) -> u32 {
        self.id
    }

    pub fn child_count(self) -> usize {
        self.trie.child_count[self.id as usize] as usize
    }
}

impl PartialEq for CompactNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.id == other.id
    }
}

impl Eq for CompactNode<'_> {}

impl<'a> TrieCursor for CompactNode<'a> {
    #[inline]
    fn is_terminal(self) -> bool {
        self.trie.terminal[self.id as usize]
    }

    fn children(self) -> impl Iterator<Item = (char, Self)> {
        let trie = self.trie;
        trie.run(self.id)
            .iter()
            .map(move |edge| (edge.unit, CompactNode { trie, id: edge.target }))
    }
}

/// Builds a [`CompactTrie`] from a word list.
///
/// Input that is not already sorted is sorted on a private copy first.
#[derive(Debug)]
pub struct CompactTrieBuilder {
    words: Vec<Vec<char>>,
}

impl CompactTrieBuilder {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let sorted = words.windows(2).all(|w| w[0].as_ref() <= w[1].as_ref());
        let mut words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        if !sorted {
            words.sort_unstable();
        }
        check_sorted_word_list(&words);

        Self {
            words: words.into_iter().map(|w| w.chars().collect()).collect(),
        }
    }

    pub fn build(self) -> CompactTrie {
        let mut trie = CompactTrie::with_root();
        let mut cursors = vec![CompactTrie::ROOT; self.words.len()];
        let longest = self.words.iter().map(Vec::len).max().unwrap_or(0);

        if self.words.iter().any(Vec::is_empty) {
            trie.mark_terminal(CompactTrie::ROOT);
        }

        for depth in 0..longest {
            for (word, cursor) in self.words.iter().zip(cursors.iter_mut()) {
                let Some(&unit) = word.get(depth) else {
                    continue;
                };
                let parent = *cursor;
                let child = match trie.last_child(parent) {
                    Some(edge) if edge.unit == unit => edge.target,
                    _ => trie.add_child(parent, unit),
                };
                if depth + 1 == word.len() {
                    trie.mark_terminal(child);
                }
                *cursor = child;
            }
        }

        debug!(
            words = trie.words,
            nodes = trie.terminal.len(),
            edges = trie.edges.len(),
            "built compact trie"
        );
        check_compact_layout(&trie);
        trie
    }
}

impl DictionaryIndex for CompactTrie {
    type Node<'a> = CompactNode<'a>;

    fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        CompactTrieBuilder::new(words).build()
    }

    fn root(&self) -> CompactNode<'_> {
        CompactNode {
            trie: self,
            id: Self::ROOT,
        }
    }

    fn word_count(&self) -> usize {
        self.words
    }

    fn node_count(&self) -> usize {
        self.terminal.len()
    }

    fn locate(&self, prefix: &str) -> Option<CompactNode<'_>> {
        let mut id = Self::ROOT;
        for unit in prefix.chars() {
            id = self.run(id).iter().find(|edge| edge.unit == unit)?.target;
        }
        Some(CompactNode { trie: self, id })
    }
}
