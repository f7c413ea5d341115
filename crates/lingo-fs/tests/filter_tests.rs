use assert_fs::TempDir;
use assert_fs::prelude::*;
use lingo_fs::{NormalizedPath, normalize_filter, search_filter};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn test_empty_filter_returns_root_itself() {
    let temp = TempDir::new().unwrap();
    temp.child("en.txt").touch().unwrap();

    let file = NormalizedPath::new(temp.path().join("en.txt"));
    let found = search_filter(&file, "");

    let mut expected = BTreeMap::new();
    expected.insert(String::new(), file);
    assert_eq!(found, expected);
}

#[test]
fn test_placeholder_matches_flat_files() {
    let temp = TempDir::new().unwrap();
    for lang in ["en", "fr", "de"] {
        temp.child(format!("{lang}.txt")).touch().unwrap();
    }

    let root = NormalizedPath::new(temp.path());
    let found = search_filter(&root, "<lang>.txt");

    let mut expected = BTreeMap::new();
    for lang in ["en", "fr", "de"] {
        expected.insert(lang.to_string(), root.join(&format!("{lang}.txt")));
    }
    assert_eq!(found, expected);
}

#[test]
fn test_placeholder_matches_directories() {
    let temp = TempDir::new().unwrap();
    for lang in ["en", "fr", "de"] {
        temp.child(format!("{lang}/text.txt")).touch().unwrap();
    }

    let root = NormalizedPath::new(temp.path());
    let found = search_filter(&root, "<lang>/text.txt");

    let mut expected = BTreeMap::new();
    for lang in ["en", "fr", "de"] {
        expected.insert(lang.to_string(), root.join(&format!("{lang}/text.txt")));
    }
    assert_eq!(found, expected);
}

#[test]
fn test_repeated_placeholder_requires_agreement() {
    let temp = TempDir::new().unwrap();
    temp.child("en/foo/en.txt").touch().unwrap();
    temp.child("en/foo/fr.txt").touch().unwrap();

    let root = NormalizedPath::new(temp.path());
    let found = search_filter(&root, "<lang>/foo/<lang>.txt");

    // fr.txt sits under en/, so its two occurrences disagree
    let mut expected = BTreeMap::new();
    expected.insert("en".to_string(), root.join("en/foo/en.txt"));
    assert_eq!(found, expected);
}

#[test]
fn test_sibling_trees_bind_distinct_codes() {
    let temp = TempDir::new().unwrap();
    temp.child("pt_BR/en.txt").touch().unwrap();
    temp.child("pt_PT/en.txt").touch().unwrap();

    let root = NormalizedPath::new(temp.path());
    let found = search_filter(&root, "<lang>/en.txt");

    let mut expected = BTreeMap::new();
    expected.insert("pt_BR".to_string(), root.join("pt_BR/en.txt"));
    expected.insert("pt_PT".to_string(), root.join("pt_PT/en.txt"));
    assert_eq!(found, expected);
}

#[test]
fn test_directories_do_not_terminate_a_match() {
    let temp = TempDir::new().unwrap();
    temp.child("en.txt/inner").touch().unwrap();
    temp.child("fr.txt").touch().unwrap();

    let root = NormalizedPath::new(temp.path());
    let found = search_filter(&root, "<lang>.txt");

    let mut expected = BTreeMap::new();
    expected.insert("fr".to_string(), root.join("fr.txt"));
    assert_eq!(found, expected);
}

#[test]
fn test_literal_filter_binds_empty_code() {
    let temp = TempDir::new().unwrap();
    temp.child("locale/en.po").touch().unwrap();

    let root = NormalizedPath::new(temp.path());
    let found = search_filter(&root, "locale/en.po");

    let mut expected = BTreeMap::new();
    expected.insert(String::new(), root.join("locale/en.po"));
    assert_eq!(found, expected);
}

#[test]
fn test_missing_tree_yields_no_matches() {
    let root = NormalizedPath::new("/nonexistent/tree/for/lingo");
    let found = search_filter(&root, "<lang>.txt");
    assert!(found.is_empty());
}

#[test]
fn test_normalize_equates_separator_styles() {
    assert_eq!(normalize_filter("en/text.txt"), normalize_filter("en\\text.txt"));
}
