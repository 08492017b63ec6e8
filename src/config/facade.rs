//! Config loading facade: assembles sources in precedence order.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::MirrorConfig;
use crate::error::MirrorError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`MirrorConfig`] from defaults, files and environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence, lowest first: defaults, global file, `treemirror.toml` in
    /// `workspace_root`, `TREEMIRROR_*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<MirrorConfig, MirrorError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder.add_source(merge_policy::environment()).build()?;

        let config: MirrorConfig = config.try_deserialize()?;
        debug!(?config, "Loaded configuration");
        Self::validated(config)
    }

    /// Load configuration from one explicit file, skipping discovery.
    ///
    /// Defaults and environment variables still apply.
    pub fn load_from_file(path: &Path) -> Result<MirrorConfig, MirrorError> {
        if !path.exists() {
            return Err(MirrorError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let config = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .add_source(merge_policy::environment())
            .build()?;

        Self::validated(config.try_deserialize()?)
    }

    fn validated(config: MirrorConfig) -> Result<MirrorConfig, MirrorError> {
        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            MirrorError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        })?;
        Ok(config)
    }
}
