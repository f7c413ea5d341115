//! Error types for lingo-api

/// Result type for lingo-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the remote service
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}
