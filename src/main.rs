// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn, Level};

use levtrie::automaton::{walk_graph, write_dot};
use levtrie::{
    accepted_words, build_dfa, read_word_list, trie_search, AutomatonCache, CacheStats,
    CompactTrie, DictionaryIndex, FuzzyMatcher, PointerTrie, TrieKind,
};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
use cli::display::{field, hit_ratio, query_line, section_bot, section_top, timing_s};
use cli::{Cli, Strategy};

/// What a run did, printed as a box or as JSON.
#[derive(Debug, Serialize)]
struct Summary {
    queries: usize,
    matches: usize,
    seconds: f64,
    max_errors: u8,
    trie: TrieKind,
    strategy: Strategy,
    split: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache: Option<CacheStats>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.validate() {
        e.exit();
    }

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let words = read_word_list(&cli.dictionary)
        .with_context(|| format!("Failed to load dictionary {}", cli.dictionary.display()))?;
    let queries = read_word_list(&cli.test)
        .with_context(|| format!("Failed to load queries {}", cli.test.display()))?;
    let reversed = match &cli.reversed {
        Some(path) => Some(
            read_word_list(path)
                .with_context(|| format!("Failed to load reversed dictionary {}", path.display()))?,
        ),
        None => None,
    };
    info!(words = words.len(), queries = queries.len(), "loaded word lists");

    if let (Some(path), Some(first)) = (&cli.graph, queries.first()) {
        write_graph(path, first, usize::from(cli.max_errors))?;
    }

    let summary = match cli.trie {
        TrieKind::Compact => {
            search_with::<CompactTrie>(cli, &words, reversed.as_deref(), &queries)?
        }
        TrieKind::Pointer => {
            search_with::<PointerTrie>(cli, &words, reversed.as_deref(), &queries)?
        }
    };

    print_summary(cli, &summary)
}

fn write_graph(path: &Path, query: &str, max_errors: usize) -> Result<()> {
    let dfa = build_dfa(query, max_errors);
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_dot(&walk_graph(&dfa, dfa.len()), &mut out)
        .and_then(|()| out.flush())
        .with_context(|| format!("Failed to write automaton graph to {}", path.display()))?;
    debug!(path = %path.display(), states = dfa.len(), "wrote automaton graph");
    Ok(())
}

fn search_with<I>(
    cli: &Cli,
    words: &[String],
    reversed: Option<&[String]>,
    queries: &[String],
) -> Result<Summary>
where
    I: DictionaryIndex + Sync,
{
    let max_error = usize::from(cli.max_errors);
    let index = I::from_words(words);
    debug!(
        trie = %cli.trie,
        words = index.word_count(),
        nodes = index.node_count(),
        "dictionary ready"
    );

    // A reversed list that is not the dictionary reversed breaks the split
    // search silently, so say so.
    let backward = reversed.map(|list| {
        if list.len() != words.len() {
            warn!(
                reversed = list.len(),
                dictionary = words.len(),
                "reversed dictionary size differs from the dictionary"
            );
        }
        I::from_words(list)
    });

    let cache = AutomatonCache::new();
    let start = Instant::now();

    let results: Vec<BTreeSet<String>> = match cli.strategy {
        Strategy::Automaton => {
            let mut matcher = FuzzyMatcher::new(&index, max_error);
            if let Some(backward) = &backward {
                matcher = matcher.with_reversed(backward)?;
            }
            if cli.cache {
                matcher = matcher.with_cache(&cache);
            }
            answer_all(cli, &matcher, queries)
        }
        Strategy::TrieDp => queries
            .iter()
            .map(|query| trie_search(index.root(), query, max_error))
            .collect(),
        Strategy::BruteForce => queries
            .iter()
            .map(|query| accepted_words(words, query, max_error))
            .collect(),
    };

    let seconds = start.elapsed().as_secs_f64();

    if cli.verbose {
        for (query, found) in queries.iter().zip(&results) {
            let found: Vec<&str> = found.iter().map(String::as_str).collect();
            println!("{}", query_line(query, &found));
        }
    }

    Ok(Summary {
        queries: queries.len(),
        matches: results.iter().map(BTreeSet::len).sum(),
        seconds,
        max_errors: cli.max_errors,
        trie: cli.trie,
        strategy: cli.strategy,
        split: backward.is_some() && cli.strategy == Strategy::Automaton,
        cache: cli.cache.then(|| cache.stats()),
    })
}

/// Answer every query, in parallel with a progress bar when available.
#[cfg(feature = "parallel")]
fn answer_all<I: DictionaryIndex + Sync>(
    cli: &Cli,
    matcher: &FuzzyMatcher<'_, I>,
    queries: &[String],
) -> Vec<BTreeSet<String>> {
    use levtrie::matching::parallel::{find_all, find_all_with_progress};

    if cli.verbose {
        return find_all(matcher, queries);
    }

    let progress = ProgressBar::new(queries.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    ) {
        progress.set_style(style.progress_chars("━━╸"));
    }
    progress.set_prefix("Matching");

    let results = find_all_with_progress(matcher, queries, &progress);
    progress.finish_and_clear();
    results
}

#[cfg(not(feature = "parallel"))]
fn answer_all<I: DictionaryIndex>(
    _cli: &Cli,
    matcher: &FuzzyMatcher<'_, I>,
    queries: &[String],
) -> Vec<BTreeSet<String>> {
    queries.iter().map(|query| matcher.find_matches(query)).collect()
}

/// Print the summary as JSON if asked to. Returns whether it did.
#[cfg(feature = "serde_json")]
fn print_json(cli: &Cli, summary: &Summary) -> Result<bool> {
    if !cli.json {
        return Ok(false);
    }
    let json = serde_json::to_string_pretty(summary).context("Failed to encode summary")?;
    println!("{}", json);
    Ok(true)
}

#[cfg(not(feature = "serde_json"))]
fn print_json(_cli: &Cli, _summary: &Summary) -> Result<bool> {
    Ok(false)
}

fn print_summary(cli: &Cli, summary: &Summary) -> Result<()> {
    if print_json(cli, summary)? {
        return Ok(());
    }

    section_top("levtrie");
    field("queries", &summary.queries.to_string());
    field("matching words", &summary.matches.to_string());
    field("max errors", &summary.max_errors.to_string());
    field("dictionary", &summary.trie.to_string());
    field("strategy", &summary.strategy.to_string());
    if summary.split {
        field("split search", "on");
    }
    field("duration", &timing_s(summary.seconds));
    if let Some(stats) = summary.cache {
        field("cache", &hit_ratio(stats.hits, stats.misses));
        field("cached automata", &stats.entries.to_string());
    }
    section_bot();
    Ok(())
}
