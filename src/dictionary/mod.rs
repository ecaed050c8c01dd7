// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary indices: tries the matcher can walk.
//!
//! The matcher never looks inside a trie. It only needs two things from a node:
//! is a word ending here, and what are the labelled children. That read
//! contract is [`TrieCursor`]; [`DictionaryIndex`] adds the root and a few
//! lookups on top.
//!
//! Two representations implement it:
//!
//! | Index                      | Layout                         | Built from         |
//! |----------------------------|--------------------------------|--------------------|
//! | [`PointerTrie`]            | owned node tree, `BTreeMap`    | any order          |
//! | [`CompactTrie`]            | four flat arrays               | sorted (or sorted for you) |
//!
//! The compact trie is the one the matcher uses by default. The pointer trie
//! is kept as a simple reference and for incremental insertion.

pub mod compact;
pub mod pointer;

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

pub use compact::{CompactNode, CompactTrie, CompactTrieBuilder, Edge};
pub use pointer::{PointerNode, PointerTrie};

/// A position in a trie.
///
/// Cursors are small `Copy` handles (a reference, or an index plus a
/// reference) so the walk can keep thousands of them on its stack.
pub trait TrieCursor: Copy {
    /// True when an indexed word ends at this node.
    fn is_terminal(self) -> bool;

    /// Labelled children, each label at most once.
    fn children(self) -> impl Iterator<Item = (char, Self)>;

    /// The child along `unit`, if any.
    fn child(self, unit: char) -> Option<Self> {
        self.children()
            .find(|&(label, _)| label == unit)
            .map(|(_, node)| node)
    }
}

/// An immutable word index the matcher can search.
pub trait DictionaryIndex {
    type Node<'a>: TrieCursor
    where
        Self: 'a;

    /// Index `words`. Duplicates collapse; the empty word marks the root.
    fn from_words<S: AsRef<str>>(words: &[S]) -> Self
    where
        Self: Sized;

    fn root(&self) -> Self::Node<'_>;

    /// Number of distinct indexed words.
    fn word_count(&self) -> usize;

    /// Number of nodes, root included.
    fn node_count(&self) -> usize;

    /// Follow `prefix` exactly from the root.
    fn locate(&self, prefix: &str) -> Option<Self::Node<'_>> {
        let mut node = self.root();
        for unit in prefix.chars() {
            node = node.child(unit)?;
        }
        Some(node)
    }

    fn contains(&self, word: &str) -> bool {
        self.locate(word).is_some_and(|node| node.is_terminal())
    }

    /// Length in chars of the longest prefix of `word` that is an indexed word.
    ///
    /// Returns 0 when no non-empty prefix is indexed.
    fn find_word(&self, word: &str) -> usize {
        let mut node = self.root();
        let mut longest = 0;
        for (depth, unit) in word.chars().enumerate() {
            match node.child(unit) {
                Some(next) => node = next,
                None => break,
            }
            if node.is_terminal() {
                longest = depth + 1;
            }
        }
        longest
    }
}

/// Which [`DictionaryIndex`] representation to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrieKind {
    #[default]
    Compact,
    Pointer,
}

impl fmt::Display for TrieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieKind::Compact => f.write_str("compact"),
            TrieKind::Pointer => f.write_str("pointer"),
        }
    }
}

/// Read a word list: one word per line, surrounding whitespace trimmed, blank
/// lines skipped.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), words = words.len(), "read word list");
    Ok(words)
}

/// Every word reversed by `char`, for building the reversed index.
pub fn reversed_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|word| word.as_ref().chars().rev().collect())
        .collect()
}
