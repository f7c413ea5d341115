//! Lingo CLI
//!
//! The command-line interface for managing localization project
//! configuration.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Migrate { root }) => {
            let start = match root {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            commands::run_migrate(&start)
        }
        None => {
            println!("{} localization configuration manager", "lingo".green().bold());
            println!();
            println!("Run {} for available commands.", "lingo --help".cyan());
            Ok(())
        }
    }
}
