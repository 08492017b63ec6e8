//! Shared test utilities for integration tests

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;
use treemirror::store::Store;
use treemirror::tree::builder::{BuildSummary, TreeBuilder};

/// Serializes tests that touch `TREEMIRROR_*` environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// `a/b.txt` = "hello", `c.txt` = "world"
pub fn scenario_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("a")).unwrap();
    fs::write(root.join("a").join("b.txt"), "hello").unwrap();
    fs::write(root.join("c.txt"), "world").unwrap();
    temp_dir
}

pub fn mirror(location: &Path, store: &Store) -> BuildSummary {
    TreeBuilder::new(location.to_path_buf()).build(store).unwrap()
}
