//! The migrate command

use std::path::Path;

use colored::Colorize;

use lingo_api::Connection;
use lingo_core::{Session, migrate_legacy_config};
use lingo_fs::NormalizedPath;

use crate::error::Result;

/// Run the migrate command starting from `start`.
///
/// Loads the session for the enclosing project, connects to the API
/// host named in the credentials, and rewrites the project document.
pub fn run_migrate(start: &Path) -> Result<()> {
    let start = NormalizedPath::new(start);
    let mut session = Session::load(&start)?;

    // With no usable credentials the engine stops with a diagnostic
    // before the connection is ever used.
    let (api_hostname, token) = match session.active_host() {
        Some(host) => (
            host.api_hostname.clone(),
            host.token.clone().unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };
    let api = Connection::new(api_hostname, token);

    match migrate_legacy_config(&mut session, &api)? {
        Some(backup) => {
            println!(
                "{} Configuration migrated. Original saved at {}",
                "OK".green().bold(),
                backup.as_str().cyan()
            );
        }
        None => {
            // Diagnostics already explained why nothing happened.
        }
    }

    Ok(())
}
