//! Typed listings over the collections the migration engine reads

use crate::model::ResourceObject;
use crate::{ApiClient, Result};

/// One organization visible to the current credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    /// Opaque server identifier, e.g. `o:acme`.
    pub id: String,
    /// Human-readable slug from `attributes.slug`.
    pub slug: String,
}

/// Fetch every page of a collection, preserving server order.
pub fn get_all(api: &dyn ApiClient, path: &str) -> Result<Vec<ResourceObject>> {
    let mut page = api.get(path)?;
    let mut data = std::mem::take(&mut page.data);
    let mut next = page.links.next;
    while let Some(path) = next {
        let mut page = api.get(&path)?;
        data.append(&mut page.data);
        next = page.links.next;
    }
    Ok(data)
}

/// List all organizations visible to the current credentials.
///
/// Follows pagination until exhausted; the server-provided order is kept
/// as-is. Entries without a slug attribute are skipped.
pub fn list_organizations(api: &dyn ApiClient) -> Result<Vec<Organization>> {
    let entries = get_all(api, "/organizations")?;
    let organizations = entries
        .iter()
        .filter_map(|entry| {
            let slug = entry.attribute_str("slug")?;
            Some(Organization {
                id: entry.id.clone(),
                slug: slug.to_string(),
            })
        })
        .collect();
    Ok(organizations)
}

/// Whether `organization_id` owns a project with `project_slug`.
///
/// Presence or absence of entries in the filtered listing is the only
/// signal used.
pub fn project_exists(
    api: &dyn ApiClient,
    organization_id: &str,
    project_slug: &str,
) -> Result<bool> {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("filter[organization]", organization_id)
        .append_pair("filter[slug]", project_slug)
        .finish();
    let page = api.get(&format!("/projects?{query}"))?;
    Ok(!page.data.is_empty())
}
