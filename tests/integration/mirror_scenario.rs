//! End-to-end mirror, list and traverse behavior

use super::test_utils::{mirror, scenario_dir};
use std::fs;
use treemirror::error::MirrorError;
use treemirror::listing::list;
use treemirror::store::{NodeSource, Store};
use treemirror::tree::node::Node;
use treemirror::tree::traverse::traverse;
use treemirror::types::NodePath;

fn root_node(store: &Store) -> Node {
    Node::Root(store.root().unwrap().expect("root stored after init"))
}

#[test]
fn test_list_root_and_folder() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);

    let root = root_node(&store);
    let top = list(&store, &root).unwrap().collect_names().unwrap();
    assert_eq!(top, vec!["a", "c.txt"]);

    let a = traverse(&store, &root, ["a"]).unwrap();
    let nested = list(&store, &a).unwrap().collect_names().unwrap();
    assert_eq!(nested, vec!["b.txt"]);
}

#[test]
fn test_root_listing_matches_top_level_entries() {
    let dir = tempfile::TempDir::new().unwrap();
    for name in ["zeta", "alpha.txt", "Mixed", "b-dir"] {
        if name.contains('.') {
            fs::write(dir.path().join(name), name).unwrap();
        } else {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
    }
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);

    let mut expected: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    expected.sort();

    let names = list(&store, &root_node(&store))
        .unwrap()
        .collect_names()
        .unwrap();
    assert_eq!(names, expected);
}

#[test]
fn test_snapshot_holds_exact_bytes() {
    let dir = tempfile::TempDir::new().unwrap();
    let bytes: Vec<u8> = (0u8..=255).chain([0, 0, 13, 10]).collect();
    fs::write(dir.path().join("blob.bin"), &bytes).unwrap();
    fs::write(dir.path().join("empty"), b"").unwrap();

    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);
    fs::write(dir.path().join("blob.bin"), b"changed afterwards").unwrap();

    let root = root_node(&store);
    let blob = traverse(&store, &root, ["blob.bin"]).unwrap();
    assert_eq!(blob.as_file().unwrap().content(), bytes.as_slice());
    let empty = traverse(&store, &root, ["empty"]).unwrap();
    assert!(empty.as_file().unwrap().content().is_empty());
}

#[test]
fn test_relisting_is_idempotent() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);

    let listing = list(&store, &root_node(&store)).unwrap();
    let first = listing.collect_names().unwrap();
    let second: Vec<String> = listing.into_iter().map(Result::unwrap).collect();
    assert_eq!(first, second);
    assert_eq!(first, listing.collect_names().unwrap());
}

#[test]
fn test_traverse_missing_first_segment() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);
    let records_before = store.len();

    let result = traverse(&store, &root_node(&store), ["nope", "b.txt"]);
    match result {
        Err(MirrorError::NotFound { segment, resolved }) => {
            assert_eq!(segment, "nope");
            assert_eq!(resolved, NodePath::root());
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert_eq!(store.len(), records_before);
    assert_eq!(
        list(&store, &root_node(&store))
            .unwrap()
            .collect_names()
            .unwrap(),
        vec!["a", "c.txt"]
    );
}

#[test]
fn test_traverse_through_file_is_rejected() {
    let dir = scenario_dir();
    let store = Store::temporary().unwrap();
    mirror(dir.path(), &store);

    let result = traverse(&store, &root_node(&store), ["c.txt", "deeper"]);
    assert!(matches!(result, Err(MirrorError::NotAContainer { .. })));
}

#[test]
fn test_deep_nesting_resolves() {
    let dir = tempfile::TempDir::new().unwrap();
    let deep = dir.path().join("l1").join("l2").join("l3").join("l4");
    fs::create_dir_all(&deep).unwrap();
    fs::write(deep.join("leaf.txt"), "leaf").unwrap();

    let store = Store::temporary().unwrap();
    let summary = mirror(dir.path(), &store);
    assert_eq!(summary.folders, 4);
    assert_eq!(summary.files, 1);

    let path = NodePath::parse("l1/l2/l3/l4/leaf.txt").unwrap();
    let leaf = traverse(&store, &root_node(&store), &path).unwrap();
    assert_eq!(leaf.location(), path);
    assert_eq!(leaf.as_file().unwrap().content(), b"leaf");
}
