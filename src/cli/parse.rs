//! CLI parse: clap types for treemirror. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Treemirror CLI - mirror a directory into a store and detect drift
#[derive(Parser, Debug)]
#[command(name = "treemirror")]
#[command(version)]
#[command(about = "Mirror a filesystem subtree into an embedded store and detect content drift")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store location (default: data-v<MAJOR>.<MINOR>.sled)
    #[arg(short = 'd', long, global = true)]
    pub db_file: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Mirror a directory into the store
    Init {
        /// Directory to mirror
        #[arg(long, default_value = ".")]
        location: PathBuf,
        /// Skip entries with this basename (repeatable)
        #[arg(long = "ignore", value_name = "NAME")]
        ignore: Vec<String>,
        /// Follow symbolic links while walking
        #[arg(long)]
        follow_symlinks: bool,
    },
    /// Print the immediate child names of a stored container
    List {
        /// Slash-separated container path (default: the root)
        #[arg(default_value = "")]
        path: String,
    },
    /// Print stored files whose live content has drifted
    Compare {
        /// Slash-separated container path (default: the root)
        #[arg(default_value = "")]
        path: String,
        /// Also compare every folder below the container
        #[arg(long)]
        recursive: bool,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}
