//! Config file sources, lowest precedence first: global, then workspace.

pub mod global_file;
pub mod workspace_file;
