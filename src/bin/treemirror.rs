//! Treemirror CLI Binary
//!
//! Command-line interface for mirroring a directory into a store and checking
//! it for drift.

use clap::Parser;
use std::path::Path;
use std::process;
use tracing::{error, info};
use treemirror::cli::{Cli, RunContext};
use treemirror::config::{ConfigLoader, MirrorConfig};
use treemirror::error::MirrorError;
use treemirror::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", treemirror::cli::map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging early
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(store = %config.store.db_file.display(), "Treemirror CLI starting");

    let context = match RunContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error opening store: {}", e);
            eprintln!("{}", treemirror::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", treemirror::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Load layered configuration, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<MirrorConfig, MirrorError> {
    let mut config = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path)?,
        None => ConfigLoader::load(Path::new("."))?,
    };
    apply_overrides(cli, &mut config);
    Ok(config)
}

fn apply_overrides(cli: &Cli, config: &mut MirrorConfig) {
    if let Some(ref db_file) = cli.db_file {
        config.store.db_file = db_file.clone();
    }

    // Logging stays off unless asked for
    if cli.verbose || cli.log_level.is_some() {
        config.logging.enabled = true;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.logging.file = Some(file.clone());
    }
}
