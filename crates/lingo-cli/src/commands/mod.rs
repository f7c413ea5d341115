//! Command implementations for lingo-cli

pub mod migrate;

pub use migrate::run_migrate;
