//! Merge rules: defaults, override order, conflict handling.

use crate::config::default_db_file;
use crate::tree::node::DEFAULT_ROOT_NAME;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix of environment variable overrides, e.g. `TREEMIRROR_STORE__DB_FILE`
pub const ENV_PREFIX: &str = "TREEMIRROR";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default(
            "store.db_file",
            default_db_file().to_string_lossy().to_string(),
        )?
        .set_default("store.root_name", DEFAULT_ROOT_NAME)
}

/// Environment source; applied last so it overrides every file.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
