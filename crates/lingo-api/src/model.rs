//! JSON:API response documents

use serde::Deserialize;

/// A top-level collection response: `{ "data": [...], "links": {...} }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionDocument {
    #[serde(default)]
    pub data: Vec<ResourceObject>,
    #[serde(default)]
    pub links: Links,
}

/// Pagination links; only `next` is followed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<String>,
}

/// One entry of a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl ResourceObject {
    /// String attribute by name, if present and a string.
    pub fn attribute_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(|value| value.as_str())
    }
}
