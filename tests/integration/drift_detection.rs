//! Integrity checker against a live directory

use super::test_utils::{mirror, scenario_dir};
use std::fs;
use treemirror::error::MirrorError;
use treemirror::integrity::IntegrityChecker;
use treemirror::store::{NodeSource, Store};
use treemirror::tree::node::Node;
use treemirror::tree::traverse::traverse;

fn checker_parts(store: &Store) -> (Node, std::path::PathBuf) {
    let root = store.root().unwrap().unwrap();
    let base = root.base_path.clone();
    (Node::Root(root), base)
}

#[test]
fn test_scenario_edit_reports_only_changed_file() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);

    fs::write(dir.path().join("c.txt"), "world!").unwrap();

    let (root, base) = checker_parts(&store);
    let report = IntegrityChecker::new(&store, &base).compare(&root).unwrap();
    assert_eq!(report.paths(), vec!["c.txt"]);
    assert_eq!(report.checked, 1);

    let drift = &report.drifted[0];
    assert_eq!(drift.stored_size, 5);
    assert_eq!(drift.live_size, 6);
    assert_ne!(drift.stored_digest, drift.live_digest);
}

#[test]
fn test_unaltered_tree_is_clean() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);

    let (root, base) = checker_parts(&store);
    let checker = IntegrityChecker::new(&store, &base);
    assert!(checker.compare(&root).unwrap().is_clean());
    assert!(checker.compare_recursive(&root).unwrap().is_clean());
}

#[test]
fn test_nested_change_needs_folder_or_recursion() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);

    fs::write(dir.path().join("a").join("b.txt"), "HELLO").unwrap();

    let (root, base) = checker_parts(&store);
    let checker = IntegrityChecker::new(&store, &base);

    assert!(checker.compare(&root).unwrap().is_clean());

    let a = traverse(&store, &root, ["a"]).unwrap();
    assert_eq!(checker.compare(&a).unwrap().paths(), vec!["a/b.txt"]);
    assert_eq!(checker.compare_recursive(&root).unwrap().paths(), vec!["a/b.txt"]);
}

#[test]
fn test_same_length_change_is_detected() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);

    fs::write(dir.path().join("c.txt"), "World").unwrap();

    let (root, base) = checker_parts(&store);
    let report = IntegrityChecker::new(&store, &base).compare(&root).unwrap();
    assert_eq!(report.paths(), vec!["c.txt"]);
}

#[test]
fn test_compare_does_not_write() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);
    fs::write(dir.path().join("c.txt"), "world!").unwrap();

    let (root, base) = checker_parts(&store);
    let records = store.len();
    IntegrityChecker::new(&store, &base).compare(&root).unwrap();

    assert_eq!(store.len(), records);
    let stored = traverse(&store, &root, ["c.txt"]).unwrap();
    assert_eq!(stored.as_file().unwrap().content(), b"world");
}

#[test]
fn test_vanished_file_is_io_error() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);
    fs::remove_file(dir.path().join("c.txt")).unwrap();

    let (root, base) = checker_parts(&store);
    let result = IntegrityChecker::new(&store, &base).compare(&root);
    assert!(matches!(result, Err(MirrorError::Io { .. })));
}
