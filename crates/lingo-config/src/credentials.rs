//! Credentials document
//!
//! One section per host URL, carrying the API endpoint and the token
//! used to authenticate against it. Migration only ever reads this
//! document; it is never rewritten.

use crate::document::RawDocument;
use crate::Result;

/// Supported username scheme for token entries.
///
/// Only entries authenticating as the literal user `api` carry a usable
/// bearer token; any other username leaves the token absent even when a
/// password value is present.
const TOKEN_USERNAME: &str = "api";

/// Parsed credentials document, host sections in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialsDocument {
    pub hosts: Vec<HostCredentials>,
}

/// One host's credentials entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostCredentials {
    /// Host URL, as written in the section header.
    pub url: String,
    /// API endpoint for this host.
    pub api_hostname: String,
    /// Web hostname for this host.
    pub hostname: String,
    /// Username scheme; only `api` yields a token.
    pub username: String,
    /// Bearer token, present only under the `api` username scheme.
    pub token: Option<String>,
}

impl CredentialsDocument {
    /// Parse the credentials document.
    ///
    /// Unknown keys are ignored so newer documents stay readable.
    pub fn parse(text: &str) -> Result<Self> {
        let raw = RawDocument::parse(text)?;
        let mut hosts = Vec::with_capacity(raw.sections.len());

        for section in &raw.sections {
            let username = section.get("username").unwrap_or_default().to_string();
            let password = section.get("password").unwrap_or_default();
            let token = if username == TOKEN_USERNAME && !password.is_empty() {
                Some(password.to_string())
            } else {
                None
            };

            hosts.push(HostCredentials {
                url: section.name.clone(),
                api_hostname: section.get("api_hostname").unwrap_or_default().to_string(),
                hostname: section.get("hostname").unwrap_or_default().to_string(),
                username,
                token,
            });
        }

        Ok(Self { hosts })
    }

    /// Look up the entry for a host URL.
    pub fn host(&self, url: &str) -> Option<&HostCredentials> {
        self.hosts.iter().find(|h| h.url == url)
    }
}
