//! Project configuration document
//!
//! A `[main]` section with global keys, followed by one section per
//! tracked resource. Resource order is significant and survives a load,
//! mutate, save cycle. A resource section is headed either by the
//! canonical identifier `o:<org>:p:<project>:r:<resource>` or, in
//! not-yet-migrated documents, by the legacy `<project>.<resource>` pair.

use std::collections::BTreeMap;

use crate::document::{RawDocument, RawSection};
use crate::{Error, Result};

const MAIN_SECTION: &str = "main";
const LANG_MAP_PREFIX: &str = "lang_map.";
const OVERRIDE_PREFIX: &str = "trans.";

/// Sentinel for "no minimum percentage configured, defer to the server".
pub const MINIMUM_PERC_UNSET: i32 = -1;

/// The in-memory project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectConfig {
    /// Host URL whose credentials entry authenticates API calls.
    pub host: String,
    /// Optional host override for source operations.
    pub source_host_override: Option<String>,
    /// Project-wide language code mappings (local code -> remote code).
    pub language_mappings: BTreeMap<String, String>,
    /// Tracked resources, in document order.
    pub resources: Vec<Resource>,
}

/// One tracked resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Owning organization; empty for a legacy resource awaiting
    /// migration.
    pub organization_slug: String,
    pub project_slug: String,
    pub resource_slug: String,
    /// Placeholder path pattern locating translation files.
    pub file_filter: String,
    /// Path of the source-language file, relative to the project root.
    pub source_file: String,
    pub source_language: String,
    /// Remote format identifier (`PO`, `YAML`, ...).
    pub resource_type: String,
    /// Resource-level language code mappings.
    pub language_mappings: BTreeMap<String, String>,
    /// Per-language file overrides (language code -> path).
    pub overrides: BTreeMap<String, String>,
    /// `-1` (unset) or `0..=100`.
    pub minimum_percentage: i32,
}

impl Default for Resource {
    fn default() -> Self {
        Self {
            organization_slug: String::new(),
            project_slug: String::new(),
            resource_slug: String::new(),
            file_filter: String::new(),
            source_file: String::new(),
            source_language: String::new(),
            resource_type: String::new(),
            language_mappings: BTreeMap::new(),
            overrides: BTreeMap::new(),
            minimum_percentage: MINIMUM_PERC_UNSET,
        }
    }
}

impl Resource {
    /// A resource is canonical once it knows its owning organization.
    pub fn is_canonical(&self) -> bool {
        !self.organization_slug.is_empty()
    }

    /// Format the fully-qualified identifier.
    ///
    /// No case transformation is applied; slugs are emitted as stored.
    pub fn canonical_id(&self) -> String {
        format!(
            "o:{}:p:{}:r:{}",
            self.organization_slug, self.project_slug, self.resource_slug
        )
    }

    /// The section header this resource serializes under.
    fn section_name(&self) -> String {
        if self.is_canonical() {
            self.canonical_id()
        } else {
            format!("{}.{}", self.project_slug, self.resource_slug)
        }
    }
}

impl ProjectConfig {
    /// Parse the project document.
    pub fn parse(text: &str) -> Result<Self> {
        let raw = RawDocument::parse(text)?;
        let mut config = ProjectConfig::default();

        for section in &raw.sections {
            if section.name == MAIN_SECTION {
                for (key, value) in &section.entries {
                    match key.as_str() {
                        "host" => config.host = value.clone(),
                        "source_host" => config.source_host_override = Some(value.clone()),
                        _ => {
                            if let Some(lang) = key.strip_prefix(LANG_MAP_PREFIX) {
                                config
                                    .language_mappings
                                    .insert(lang.to_string(), value.clone());
                            } else {
                                tracing::debug!(key = %key, "ignoring unknown main key");
                            }
                        }
                    }
                }
            } else {
                config.resources.push(parse_resource(section)?);
            }
        }

        Ok(config)
    }

    /// Serialize the configuration back to document text.
    ///
    /// Section order follows `resources`; map-valued fields are emitted
    /// as repeated keys. Unset fields are omitted.
    pub fn serialize(&self) -> String {
        let mut raw = RawDocument::default();

        let mut main = RawSection::new(MAIN_SECTION);
        if !self.host.is_empty() {
            main.push("host", self.host.clone());
        }
        if let Some(source_host) = &self.source_host_override {
            main.push("source_host", source_host.clone());
        }
        for (lang, mapped) in &self.language_mappings {
            main.push(format!("{LANG_MAP_PREFIX}{lang}"), mapped.clone());
        }
        raw.sections.push(main);

        for resource in &self.resources {
            let mut section = RawSection::new(resource.section_name());
            if !resource.file_filter.is_empty() {
                section.push("file_filter", resource.file_filter.clone());
            }
            if resource.minimum_percentage != MINIMUM_PERC_UNSET {
                section.push("minimum_perc", resource.minimum_percentage.to_string());
            }
            if !resource.source_file.is_empty() {
                section.push("source_file", resource.source_file.clone());
            }
            if !resource.source_language.is_empty() {
                section.push("source_lang", resource.source_language.clone());
            }
            if !resource.resource_type.is_empty() {
                section.push("type", resource.resource_type.clone());
            }
            for (lang, mapped) in &resource.language_mappings {
                section.push(format!("{LANG_MAP_PREFIX}{lang}"), mapped.clone());
            }
            for (lang, path) in &resource.overrides {
                section.push(format!("{OVERRIDE_PREFIX}{lang}"), path.clone());
            }
            raw.sections.push(section);
        }

        raw.serialize()
    }
}

fn parse_resource(section: &RawSection) -> Result<Resource> {
    let (organization_slug, project_slug, resource_slug) = parse_header(&section.name)?;

    let mut resource = Resource {
        organization_slug,
        project_slug,
        resource_slug,
        ..Resource::default()
    };

    for (key, value) in &section.entries {
        match key.as_str() {
            "file_filter" => resource.file_filter = value.clone(),
            "source_file" => resource.source_file = value.clone(),
            "source_lang" => resource.source_language = value.clone(),
            "type" => resource.resource_type = value.clone(),
            "minimum_perc" => {
                resource.minimum_percentage = parse_minimum_perc(&section.name, value)?;
            }
            _ => {
                if let Some(lang) = key.strip_prefix(OVERRIDE_PREFIX) {
                    resource.overrides.insert(lang.to_string(), value.clone());
                } else if let Some(lang) = key.strip_prefix(LANG_MAP_PREFIX) {
                    resource
                        .language_mappings
                        .insert(lang.to_string(), value.clone());
                } else {
                    tracing::debug!(section = %section.name, key = %key, "ignoring unknown resource key");
                }
            }
        }
    }

    Ok(resource)
}

/// Parse a resource section header into `(organization, project, resource)`.
///
/// A header containing `:` must be a well-formed canonical identifier;
/// anything else must be the legacy `<project>.<resource>` pair.
fn parse_header(header: &str) -> Result<(String, String, String)> {
    if header.contains(':') {
        let parts: Vec<&str> = header.split(':').collect();
        if parts.len() == 6
            && parts[0] == "o"
            && parts[2] == "p"
            && parts[4] == "r"
            && parts[1..].iter().step_by(2).all(|slug| !slug.is_empty())
        {
            return Ok((
                parts[1].to_string(),
                parts[3].to_string(),
                parts[5].to_string(),
            ));
        }
        return Err(Error::MalformedHeader {
            header: header.to_string(),
        });
    }

    let parts: Vec<&str> = header.split('.').collect();
    if parts.len() == 2 && parts.iter().all(|part| !part.is_empty()) {
        return Ok((String::new(), parts[0].to_string(), parts[1].to_string()));
    }
    Err(Error::MalformedHeader {
        header: header.to_string(),
    })
}

fn parse_minimum_perc(section: &str, value: &str) -> Result<i32> {
    let parsed: i32 = value
        .parse()
        .map_err(|_| Error::InvalidMinimumPercentage {
            section: section.to_string(),
            value: value.to_string(),
        })?;
    if parsed != MINIMUM_PERC_UNSET && !(0..=100).contains(&parsed) {
        return Err(Error::MinimumPercentageOutOfRange {
            section: section.to_string(),
            value: parsed,
        });
    }
    Ok(parsed)
}
