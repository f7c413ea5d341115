//! Minimal JSON:API read client
//!
//! The migration engine only ever reads two collections from the remote
//! service: the organization listing and the filtered project listing.
//! [`Connection`] is the HTTP implementation; everything downstream
//! depends on the [`ApiClient`] trait so tests can script responses.

pub mod connection;
pub mod error;
pub mod listing;
pub mod model;

pub use connection::Connection;
pub use error::{Error, Result};
pub use listing::{Organization, list_organizations, project_exists};
pub use model::{CollectionDocument, Links, ResourceObject};

/// Read access to the remote JSON:API service.
///
/// `path` is an absolute path with optional query string, or a full URL
/// (pagination links may be either).
pub trait ApiClient {
    fn get(&self, path: &str) -> Result<CollectionDocument>;
}
