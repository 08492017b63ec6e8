//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_drift_report_json, format_drift_report_text, format_init_summary, format_list_result,
};
use crate::config::MirrorConfig;
use crate::error::MirrorError;
use crate::integrity::IntegrityChecker;
use crate::listing::list;
use crate::store::Store;
use crate::tree::builder::TreeBuilder;
use crate::tree::node::{Node, RootNode};
use crate::tree::path;
use crate::tree::traverse::traverse;
use crate::types::NodePath;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, info_span};

/// Runtime context for CLI execution: loaded config and the open store.
pub struct RunContext {
    config: MirrorConfig,
    store: Store,
}

impl RunContext {
    /// Open the store named by `config.store.db_file`.
    pub fn new(config: MirrorConfig) -> Result<Self, MirrorError> {
        let store = Store::open(&config.store.db_file)?;
        Ok(Self { config, store })
    }

    /// Build a context around an already open store.
    pub fn with_store(config: MirrorConfig, store: Store) -> Self {
        Self { config, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, MirrorError> {
        let started = Instant::now();
        let span = info_span!("command", name = command_name(command));
        let _guard = span.enter();

        let result = self.execute_inner(command);
        info!(
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis(),
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, MirrorError> {
        match command {
            Commands::Init {
                location,
                ignore,
                follow_symlinks,
            } => {
                let mut walker_config = self.config.walker.to_walker_config();
                walker_config.ignore_patterns.extend(ignore.iter().cloned());
                walker_config.follow_symlinks |= *follow_symlinks;
                if let Some(log_file) = self.config.logging.active_log_file() {
                    walker_config
                        .exclude_paths
                        .push(path::absolutize(&log_file)?);
                }

                let summary = TreeBuilder::new(location.clone())
                    .with_root_name(self.config.store.root_name.clone())
                    .with_walker_config(walker_config)
                    .build(&self.store)?;
                Ok(format_init_summary(&summary))
            }
            Commands::List { path } => {
                let (_, container) = self.resolve(path)?;
                let names = list(&self.store, &container)?.collect_names()?;
                Ok(format_list_result(&names))
            }
            Commands::Compare {
                path,
                recursive,
                format,
            } => {
                let (root, container) = self.resolve(path)?;
                let checker = IntegrityChecker::new(&self.store, &root.base_path);
                let report = if *recursive {
                    checker.compare_recursive(&container)?
                } else {
                    checker.compare(&container)?
                };
                match format.as_str() {
                    "json" => format_drift_report_json(&report),
                    _ => Ok(format_drift_report_text(&report)),
                }
            }
        }
    }

    /// Root of the store plus the node at the `/`-separated `path` below it.
    ///
    /// A store that was never initialized yields an unsaved, empty Root
    /// anchored at the working directory.
    fn resolve(&self, path: &str) -> Result<(RootNode, Node), MirrorError> {
        let default_base = default_base_path()?;
        let root = self
            .store
            .open_root(&self.config.store.root_name, &default_base)?;
        let segments = NodePath::parse(path)?;
        let node = traverse(&self.store, &Node::Root(root.clone()), &segments)?;
        Ok((root, node))
    }
}

fn default_base_path() -> Result<PathBuf, MirrorError> {
    path::absolutize(Path::new("."))
}
