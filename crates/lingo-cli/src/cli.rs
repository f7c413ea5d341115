//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lingo - manage localization project configuration
#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Upgrade a legacy configuration to canonical resource identifiers
    ///
    /// Resolves each resource's owning organization through the remote
    /// service and rewrites the project document in place, keeping a
    /// backup of the original next to it.
    Migrate {
        /// Directory to start searching for the project configuration
        /// (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}
