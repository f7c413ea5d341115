//! Organization-slug resolution
//!
//! A legacy resource only knows its project slug. The owning
//! organization is discovered by walking the organization listing and
//! probing the filtered project listing for each one.

use lingo_api::{ApiClient, list_organizations, project_exists};
use lingo_config::Resource;

use crate::Result;

/// Discover the slug of the organization owning `resource`'s project.
///
/// Organizations are probed in the order the server lists them; the
/// first one whose filtered project listing is non-empty wins. If the
/// same project slug exists under several organizations the first
/// enumerated is chosen — a documented ambiguity, with no tie-break.
///
/// Returns the empty string when no organization matches; that is
/// "could not resolve", not an error. Transport failures propagate.
pub fn resolve_organization_slug(api: &dyn ApiClient, resource: &Resource) -> Result<String> {
    for organization in list_organizations(api)? {
        if project_exists(api, &organization.id, &resource.project_slug)? {
            tracing::debug!(
                project = %resource.project_slug,
                organization = %organization.slug,
                "resolved owning organization"
            );
            return Ok(organization.slug);
        }
    }
    tracing::debug!(project = %resource.project_slug, "no owning organization found");
    Ok(String::new())
}
