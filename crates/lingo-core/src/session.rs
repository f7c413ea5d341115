//! Session loading and persistence
//!
//! A session is the single in-memory owner of both configuration
//! documents for one project: the project document (required) and the
//! credentials document (optional — its absence is an expected operator
//! condition handled by the migration engine, not a load error).

use lingo_config::{CredentialsDocument, HostCredentials, ProjectConfig};
use lingo_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// Directory holding the project document, found by upward search.
pub const PROJECT_CONFIG_DIR: &str = ".lingo";
/// File name of the project document inside [`PROJECT_CONFIG_DIR`].
pub const PROJECT_CONFIG_FILE: &str = "config";
/// File name of the credentials document.
pub const CREDENTIALS_FILE: &str = ".lingorc";

/// Both documents plus their on-disk locations.
#[derive(Debug)]
pub struct Session {
    /// Project root: the directory containing `.lingo/`.
    pub root: NormalizedPath,
    /// Path of the project document.
    pub config_path: NormalizedPath,
    /// The parsed project document.
    pub config: ProjectConfig,
    /// The parsed credentials document, if one was found.
    pub credentials: Option<CredentialsDocument>,
}

impl Session {
    /// Load the session for the project containing `start`.
    ///
    /// Walks upward from `start` looking for `.lingo/config`, then reads
    /// credentials from the project root or the user's home directory.
    pub fn load(start: &NormalizedPath) -> Result<Self> {
        let config_path =
            find_project_config(start).ok_or_else(|| Error::ProjectConfigNotFound {
                start: start.to_native(),
            })?;
        let credentials_path = config_path
            .parent()
            .and_then(|dir| dir.parent())
            .and_then(|root| find_credentials(&root));
        Self::from_paths(credentials_path.as_ref(), &config_path)
    }

    /// Load the session from explicit document paths.
    ///
    /// `credentials_path` is optional; a `None` leaves the session
    /// without credentials, which migration reports as a diagnostic.
    pub fn from_paths(
        credentials_path: Option<&NormalizedPath>,
        config_path: &NormalizedPath,
    ) -> Result<Self> {
        let config = load_project_config(config_path)?;

        let credentials = match credentials_path {
            Some(path) => {
                let text = io::read_text(path)?;
                Some(CredentialsDocument::parse(&text)?)
            }
            None => None,
        };

        let root = config_path
            .parent()
            .and_then(|dir| dir.parent())
            .unwrap_or_else(|| NormalizedPath::new("."));

        Ok(Self {
            root,
            config_path: config_path.clone(),
            config,
            credentials,
        })
    }

    /// The credentials entry for the host the project document points at.
    ///
    /// A `source_host` override in the project document takes precedence
    /// over `host`.
    pub fn active_host(&self) -> Option<&HostCredentials> {
        let host = self
            .config
            .source_host_override
            .as_deref()
            .unwrap_or(&self.config.host);
        self.credentials.as_ref()?.host(host)
    }

    /// Serialize the project document back over its original path.
    pub fn save_config(&self) -> Result<()> {
        save_project_config(&self.config_path, &self.config)
    }
}

/// Walk upward from `start` to find the project document.
///
/// `start` may be the project root or any directory inside it.
pub fn find_project_config(start: &NormalizedPath) -> Option<NormalizedPath> {
    let mut current = Some(start.clone());
    while let Some(dir) = current {
        let candidate = dir.join(PROJECT_CONFIG_DIR).join(PROJECT_CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

/// Locate the credentials document for a project.
///
/// The project root is checked first so a tree-local document can shadow
/// the per-user one in the home directory.
pub fn find_credentials(root: &NormalizedPath) -> Option<NormalizedPath> {
    let local = root.join(CREDENTIALS_FILE);
    if local.is_file() {
        return Some(local);
    }
    let home = NormalizedPath::new(dirs::home_dir()?).join(CREDENTIALS_FILE);
    home.is_file().then_some(home)
}

/// Read and parse the project document at `path`.
pub fn load_project_config(path: &NormalizedPath) -> Result<ProjectConfig> {
    let text = io::read_text(path)?;
    Ok(ProjectConfig::parse(&text)?)
}

/// Serialize `config` and write it atomically to `path`.
pub fn save_project_config(path: &NormalizedPath, config: &ProjectConfig) -> Result<()> {
    io::write_atomic(path, config.serialize().as_bytes())?;
    Ok(())
}
