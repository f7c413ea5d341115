//! Temp-directory project fixtures

use std::fs;
use std::path::Path;

use lingo_fs::NormalizedPath;
use tempfile::TempDir;

/// A throwaway project tree with the standard document locations.
///
/// ```text
/// <temp>/
///   .lingorc          (credentials, optional)
///   .lingo/config     (project document)
///   ...               (translation files via `write_file`)
/// ```
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp project dir"),
        }
    }

    /// The project root.
    pub fn root(&self) -> NormalizedPath {
        NormalizedPath::new(self.dir.path())
    }

    pub fn credentials_path(&self) -> NormalizedPath {
        self.root().join(".lingorc")
    }

    pub fn config_path(&self) -> NormalizedPath {
        self.root().join(".lingo").join("config")
    }

    /// Write the credentials document.
    pub fn write_credentials(&self, text: &str) {
        self.write_file(".lingorc", text);
    }

    /// Write the project document.
    pub fn write_config(&self, text: &str) {
        self.write_file(".lingo/config", text);
    }

    /// Write any file relative to the project root, creating parents.
    pub fn write_file(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join(Path::new(relative));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parents");
        }
        fs::write(&path, contents).expect("write fixture file");
    }

    /// Read the project document back from disk.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path().to_native()).expect("read project document")
    }

    /// List sibling backup files of the project document.
    pub fn backup_files(&self) -> Vec<String> {
        let dir = self.dir.path().join(".lingo");
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("read .lingo dir")
            .flatten()
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".bak"))
            .collect();
        names.sort();
        names
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}
