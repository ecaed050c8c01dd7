// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the library.
//!
//! Only two things can go wrong: the caller asked for a configuration the
//! matcher cannot honor, or the file system got in the way. Everything a search
//! can "fail" at (no transition, no child, no match) is an `Option`, not an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by levtrie operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The split search only covers the ways two edits can distribute over two
    /// halves of the query.
    #[error("reversed-word dictionary can be used only with a maximum error of 2 (got {max_error})")]
    ReversedIndexBudget { max_error: usize },

    /// Reading a word list or writing an automaton graph failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
