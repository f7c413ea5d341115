//! Error types for lingo-config

/// Result type for lingo-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing configuration documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Malformed resource section header: [{header}]")]
    MalformedHeader { header: String },

    #[error("Invalid minimum_perc value '{value}' in [{section}]")]
    InvalidMinimumPercentage { section: String, value: String },

    #[error("minimum_perc {value} in [{section}] is out of range (-1 or 0..=100)")]
    MinimumPercentageOutOfRange { section: String, value: i32 },
}
