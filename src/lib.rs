//! Treemirror: Filesystem Mirroring and Drift Detection
//!
//! Mirrors a filesystem subtree into an embedded ordered store as a typed node
//! tree, then verifies that the stored snapshots still match the live files.

pub mod cli;
pub mod config;
pub mod error;
pub mod integrity;
pub mod listing;
pub mod logging;
pub mod store;
pub mod tree;
pub mod types;
