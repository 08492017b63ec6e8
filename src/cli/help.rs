//! CLI command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "init", "compare").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::List { .. } => "list",
        Commands::Compare { .. } => "compare",
    }
}
