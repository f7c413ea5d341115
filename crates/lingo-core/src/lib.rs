//! Core orchestration for Lingo
//!
//! Owns the in-memory session (both configuration documents plus their
//! on-disk locations) and the legacy-configuration migration engine that
//! upgrades `<project>.<resource>` sections to fully-qualified canonical
//! identifiers.

pub mod error;
pub mod migrate;
pub mod resolver;
pub mod session;

pub use error::{Error, Result};
pub use migrate::{migrate_legacy_config, migrate_legacy_config_to};
pub use resolver::resolve_organization_slug;
pub use session::{
    CREDENTIALS_FILE, PROJECT_CONFIG_DIR, PROJECT_CONFIG_FILE, Session, find_credentials,
    find_project_config, load_project_config, save_project_config,
};
