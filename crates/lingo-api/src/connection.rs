//! Blocking HTTP connection to the remote service

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::model::CollectionDocument;
use crate::{ApiClient, Error, Result};

const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Authenticated connection to one API host.
///
/// All requests are blocking; the migration engine is single-threaded
/// and strictly sequential, so no connection pooling beyond reqwest's
/// default is needed.
#[derive(Debug, Clone)]
pub struct Connection {
    api_hostname: String,
    token: String,
    client: Client,
}

impl Connection {
    /// Create a connection to `api_hostname` authenticating with `token`.
    pub fn new(api_hostname: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_hostname: api_hostname.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.api_hostname, path)
        }
    }
}

impl ApiClient for Connection {
    fn get(&self, path: &str) -> Result<CollectionDocument> {
        let url = self.absolute_url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, JSON_API_CONTENT_TYPE)
            .send()
            .map_err(|e| Error::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| Error::Transport {
            url: url.clone(),
            source: e,
        })?;
        serde_json::from_str(&body).map_err(|e| Error::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let conn = Connection::new("https://api.example.com/", "t");
        assert_eq!(
            conn.absolute_url("/organizations"),
            "https://api.example.com/organizations"
        );
    }

    #[test]
    fn test_full_urls_pass_through() {
        let conn = Connection::new("https://api.example.com", "t");
        assert_eq!(
            conn.absolute_url("https://api.example.com/organizations?page=2"),
            "https://api.example.com/organizations?page=2"
        );
    }
}
