//! Error types for lingo-core

use std::path::PathBuf;

/// Result type for lingo-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lingo-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] lingo_fs::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] lingo_config::Error),

    #[error("API error: {0}")]
    Api(#[from] lingo_api::Error),

    #[error("No project configuration found above {start}")]
    ProjectConfigNotFound { start: PathBuf },
}
