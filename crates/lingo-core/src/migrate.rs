//! Legacy-configuration migration
//!
//! Upgrades every `<project>.<resource>` section of the project document
//! to a canonical `o:<org>:p:<project>:r:<resource>` section, resolving
//! the organization through the remote API and locating missing source
//! files on disk. Resources that cannot be resolved keep their legacy
//! header; the resulting mixed document is a legitimate end state.

use std::io::Write;

use chrono::Local;
use lingo_api::ApiClient;
use lingo_fs::{NormalizedPath, filter, io};

use crate::resolver::resolve_organization_slug;
use crate::session::Session;
use crate::Result;

/// Migrate the session's project document, reporting to stdout.
///
/// Returns the path of the backup written next to the project document,
/// or `None` when migration did not proceed (missing or unusable
/// credentials — an expected operator condition, not an error).
pub fn migrate_legacy_config(
    session: &mut Session,
    api: &dyn ApiClient,
) -> Result<Option<NormalizedPath>> {
    migrate_legacy_config_to(session, api, &mut std::io::stdout())
}

/// Migrate the session's project document, reporting to `out`.
///
/// Diagnostics for non-fatal conditions go to `out` and never affect the
/// returned value; "the operation failed" and "the user needs to act"
/// are deliberately separate channels.
pub fn migrate_legacy_config_to(
    session: &mut Session,
    api: &dyn ApiClient,
    out: &mut dyn Write,
) -> Result<Option<NormalizedPath>> {
    if session.credentials.is_none() {
        let _ = writeln!(out, "Please provide an API token to continue.");
        return Ok(None);
    }
    let has_token = session
        .active_host()
        .is_some_and(|host| host.token.is_some());
    if !has_token {
        let _ = writeln!(out, "API token not found.");
        return Ok(None);
    }

    let root = session.root.clone();
    for resource in &mut session.config.resources {
        if resource.is_canonical() {
            tracing::debug!(id = %resource.canonical_id(), "resource already canonical");
            continue;
        }

        // The organization listing is a prerequisite for every resource,
        // so a transport failure here aborts the whole run.
        let organization_slug = resolve_organization_slug(api, resource)?;
        if organization_slug.is_empty() {
            let _ = writeln!(
                out,
                "Could not migrate resource `{}`",
                resource.resource_slug
            );
            continue;
        }

        resource.organization_slug = organization_slug;
        if resource.source_file.is_empty() && !resource.file_filter.is_empty() {
            resource.source_file = locate_source_file(&root, resource);
        }
    }

    let original = io::read_bytes(&session.config_path)?;
    let backup_path = derive_backup_path(&session.config_path);
    io::write_atomic(&backup_path, &original)?;
    session.save_config()?;

    tracing::debug!(backup = %backup_path, "migration written");
    Ok(Some(backup_path))
}

/// Find the source file a legacy resource never recorded.
///
/// Substitutes the source language for every placeholder in the file
/// filter and searches the project tree for the resulting literal
/// pattern, so the stored path carries the casing found on disk. Returns
/// the path relative to the project root, or empty when nothing matched.
fn locate_source_file(root: &NormalizedPath, resource: &lingo_config::Resource) -> String {
    let pattern = filter::substitute_lang(
        &filter::normalize_filter(&resource.file_filter),
        &resource.source_language,
    );
    let found = filter::search_filter(root, &pattern);
    found
        .get("")
        .and_then(|path| path.relative_to(root))
        .unwrap_or_default()
        .to_string()
}

/// Backup sibling of the project document, stamped so repeated runs do
/// not clobber earlier backups.
fn derive_backup_path(config_path: &NormalizedPath) -> NormalizedPath {
    let stamp = Local::now().format("%Y%m%d%H%M%S");
    NormalizedPath::new(format!("{config_path}_{stamp}.bak"))
}
