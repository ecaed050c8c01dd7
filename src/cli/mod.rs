// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the levtrie command-line interface.
//!
//! One flat command: load a dictionary and a query file, answer every query
//! within `-e` edits, print a summary. `-r` switches on the split search (only
//! meaningful at two edits), `-g` dumps the first query's automaton as DOT, and
//! `--strategy` swaps the automaton for one of the DP baselines.

pub mod display;

use std::fmt;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use levtrie::TrieKind;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "levtrie",
    about = "Fuzzy dictionary lookup with Levenshtein automata",
    version
)]
pub struct Cli {
    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: PathBuf,

    /// Query file, one word per line
    #[arg(short, long, value_name = "FILE")]
    pub test: PathBuf,

    /// Maximum number of edits
    #[arg(short = 'e', long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..))]
    pub max_errors: u8,

    /// Dictionary with every word reversed; enables the split search
    ///
    /// Only valid together with `-e 2`.
    #[arg(short, long, value_name = "FILE")]
    pub reversed: Option<PathBuf>,

    /// Write the first query's automaton to FILE as a Graphviz digraph
    #[arg(short, long, value_name = "FILE")]
    pub graph: Option<PathBuf>,

    /// Memoize automata across queries
    #[arg(short, long)]
    pub cache: bool,

    /// Print the matches of every query
    #[arg(short, long)]
    pub verbose: bool,

    /// Dictionary representation
    #[arg(long, value_enum, default_value_t = TrieKind::Compact)]
    pub trie: TrieKind,

    /// Matching algorithm
    #[arg(long, value_enum, default_value_t = Strategy::Automaton)]
    pub strategy: Strategy,

    /// Print the run summary as JSON
    #[cfg(feature = "serde_json")]
    #[arg(long)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(long)]
    pub debug: bool,
}

/// How queries are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Levenshtein DFA walked over the trie
    Automaton,
    /// Row-by-row edit-distance DP over the trie
    TrieDp,
    /// Bounded edit distance against every dictionary word
    BruteForce,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Automaton => f.write_str("automaton"),
            Strategy::TrieDp => f.write_str("trie-dp"),
            Strategy::BruteForce => f.write_str("brute-force"),
        }
    }
}

impl Cli {
    /// Checks clap cannot express declaratively.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.reversed.is_some() && self.max_errors != 2 {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                format!(
                    "reversed-word dictionary can be used only with a maximum error of 2 (got {})",
                    self.max_errors
                ),
            ));
        }
        if self.reversed.is_some() && self.strategy != Strategy::Automaton {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--reversed only applies to the automaton strategy",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("levtrie").chain(args.iter().copied()))
    }

    #[test]
    fn test_required_flags() {
        assert!(parse(&["-d", "dict.txt", "-t", "queries.txt"]).is_err());
        assert!(parse(&["-d", "dict.txt", "-e", "1"]).is_err());

        let cli = parse(&["-d", "dict.txt", "-t", "queries.txt", "-e", "1"]).unwrap();
        assert_eq!(cli.max_errors, 1);
        assert_eq!(cli.trie, TrieKind::Compact);
        assert_eq!(cli.strategy, Strategy::Automaton);
        assert!(!cli.cache && !cli.verbose);
    }

    #[test]
    fn test_max_errors_must_be_positive_integer() {
        assert!(parse(&["-d", "a", "-t", "b", "-e", "0"]).is_err());
        assert!(parse(&["-d", "a", "-t", "b", "-e", "two"]).is_err());
    }

    #[test]
    fn test_reversed_requires_two_errors() {
        let cli = parse(&["-d", "a", "-t", "b", "-e", "1", "-r", "c"]).unwrap();
        assert_eq!(cli.validate().unwrap_err().kind(), ErrorKind::ArgumentConflict);

        let cli = parse(&["-d", "a", "-t", "b", "-e", "2", "-r", "c"]).unwrap();
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_strategy_names() {
        let cli = parse(&["-d", "a", "-t", "b", "-e", "2", "--strategy", "trie-dp"]).unwrap();
        assert_eq!(cli.strategy, Strategy::TrieDp);
        let cli = parse(&["-d", "a", "-t", "b", "-e", "2", "--trie", "pointer"]).unwrap();
        assert_eq!(cli.trie, TrieKind::Pointer);
    }
}
