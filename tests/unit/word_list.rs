//! Reading dictionaries and query files from disk.

use super::common::word_file;
use levtrie::{read_word_list, reversed_words, CompactTrie, DictionaryIndex, Error};

#[test]
fn test_lines_are_trimmed_and_blanks_skipped() {
    let file = word_file(&["  cat ", "", "dog\t", "   ", "bird"]);
    let words = read_word_list(file.path()).unwrap();
    assert_eq!(words, vec!["cat", "dog", "bird"]);
}

#[test]
fn test_empty_file_is_an_empty_dictionary() {
    let file = word_file(&[]);
    let words = read_word_list(file.path()).unwrap();
    assert!(words.is_empty());

    let trie = CompactTrie::from_words(&words);
    assert_eq!(trie.word_count(), 0);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let err = read_word_list(&missing).unwrap_err();

    match &err {
        Error::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_reversed_file_round_trip() {
    let file = word_file(&["stressed", "drawer"]);
    let words = read_word_list(file.path()).unwrap();
    assert_eq!(reversed_words(&words), vec!["desserts", "reward"]);
}
