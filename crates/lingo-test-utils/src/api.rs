//! Scripted API double

use std::cell::RefCell;
use std::collections::HashMap;

use lingo_api::{ApiClient, CollectionDocument, Error, Result};

/// A scripted [`ApiClient`]: maps request paths to queued JSON bodies.
///
/// Each `respond` call enqueues one response for a path; repeated
/// requests consume the queue in order, and the last response is replayed
/// once the queue is down to one entry. Requesting an unscripted path
/// panics, which fails the test with the offending path in the message.
#[derive(Default)]
pub struct MockApi {
    responses: RefCell<HashMap<String, Vec<String>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a JSON response body for `path`.
    pub fn respond(self, path: &str, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push(body.to_string());
        self
    }

    /// The encoded filtered-projects path for `(organization id, slug)`,
    /// matching what the client sends on the wire.
    pub fn projects_path(organization_id: &str, project_slug: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("filter[organization]", organization_id)
            .append_pair("filter[slug]", project_slug)
            .finish();
        format!("/projects?{query}")
    }
}

impl ApiClient for MockApi {
    fn get(&self, path: &str) -> Result<CollectionDocument> {
        let mut responses = self.responses.borrow_mut();
        let queue = responses
            .get_mut(path)
            .unwrap_or_else(|| panic!("no scripted response for {path}"));
        assert!(!queue.is_empty(), "scripted responses for {path} exhausted");
        let body = if queue.len() == 1 {
            queue[0].clone()
        } else {
            queue.remove(0)
        };
        serde_json::from_str(&body).map_err(|e| Error::Decode {
            url: path.to_string(),
            message: e.to_string(),
        })
    }
}
