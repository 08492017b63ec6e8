//! Property-based tests for the mirror round trip

use proptest::collection::{btree_map, vec};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use treemirror::integrity::IntegrityChecker;
use treemirror::store::{NodeSource, Store};
use treemirror::tree::builder::TreeBuilder;
use treemirror::tree::node::Node;
use treemirror::tree::traverse::traverse;
use treemirror::types::NodePath;

fn file_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}\\.txt"
}

/// Listing the Root after a build yields exactly the top-level names, in order
#[test]
fn test_root_listing_round_trip_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(24));

    runner
        .run(
            &btree_map(file_name(), vec(any::<u8>(), 0..256), 0..12),
            |files: BTreeMap<String, Vec<u8>>| {
                let dir = TempDir::new().unwrap();
                for (name, content) in &files {
                    fs::write(dir.path().join(name), content).unwrap();
                }

                let store = Store::temporary().unwrap();
                TreeBuilder::new(dir.path().to_path_buf())
                    .build(&store)
                    .unwrap();

                let names = store.child_names(&NodePath::root()).unwrap();
                let expected: Vec<String> = files.keys().cloned().collect();
                prop_assert_eq!(names, expected);

                let root = Node::Root(store.root().unwrap().unwrap());
                for (name, content) in &files {
                    let node = traverse(&store, &root, [name.as_str()]).unwrap();
                    prop_assert_eq!(node.as_file().unwrap().content(), content.as_slice());
                }
                Ok(())
            },
        )
        .unwrap();
}

/// Exactly the files whose bytes change are reported as drifted
#[test]
fn test_drift_matches_modified_set_property() {
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(24));

    runner
        .run(
            &btree_map(file_name(), (vec(any::<u8>(), 0..64), any::<bool>()), 1..10),
            |files: BTreeMap<String, (Vec<u8>, bool)>| {
                let dir = TempDir::new().unwrap();
                for (name, (content, _)) in &files {
                    fs::write(dir.path().join(name), content).unwrap();
                }

                let store = Store::temporary().unwrap();
                TreeBuilder::new(dir.path().to_path_buf())
                    .build(&store)
                    .unwrap();

                let mut expected = Vec::new();
                for (name, (content, modify)) in &files {
                    if *modify {
                        let mut changed = content.clone();
                        changed.push(0x2a);
                        fs::write(dir.path().join(name), changed).unwrap();
                        expected.push(name.clone());
                    }
                }

                let root = store.root().unwrap().unwrap();
                let base = root.base_path.clone();
                let report = IntegrityChecker::new(&store, &base)
                    .compare(&Node::Root(root))
                    .unwrap();
                prop_assert_eq!(report.paths(), expected);
                prop_assert_eq!(report.checked, files.len());
                Ok(())
            },
        )
        .unwrap();
}
