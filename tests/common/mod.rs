// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed repository/destination pair so each
// integration test can set up an isolated symlink farm without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// An isolated repository and destination, both backed by
/// [`tempfile::TempDir`] and deleted automatically on drop.
pub struct TestFarm {
    /// Repository directory holding packages.
    pub repository: tempfile::TempDir,
    /// Destination directory where links are created.
    pub destination: tempfile::TempDir,
}

impl TestFarm {
    /// Create a new empty farm.
    pub fn new() -> Self {
        Self {
            repository: tempfile::tempdir().expect("create repository temp dir"),
            destination: tempfile::tempdir().expect("create destination temp dir"),
        }
    }

    /// Path to the repository root.
    pub fn repo(&self) -> &Path {
        self.repository.path()
    }

    /// Path to the destination root.
    pub fn dest(&self) -> &Path {
        self.destination.path()
    }

    /// Create an empty package directory and return its path.
    pub fn package(&self, name: &str) -> PathBuf {
        let dir = self.repo().join(name);
        std::fs::create_dir_all(&dir).expect("create package dir");
        dir
    }

    /// Create a file at `rel` inside the named package, creating parents as
    /// needed, and return the file path.
    pub fn package_file(&self, package: &str, rel: &str) -> PathBuf {
        let path = self.repo().join(package).join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create package file parent");
        }
        std::fs::write(&path, "").expect("write package file");
        path
    }

    /// Write a `.stow.toml` manifest at the repository root.
    pub fn manifest(&self, content: &str) {
        std::fs::write(self.repo().join(".stow.toml"), content).expect("write manifest");
    }

    /// Count the entries directly under the destination root.
    pub fn dest_entry_count(&self) -> usize {
        std::fs::read_dir(self.dest())
            .expect("read destination dir")
            .count()
    }
}
