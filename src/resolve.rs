//! Package layout detection and link-pair resolution.
//!
//! A package exposes its files in one of two mutually exclusive layouts:
//!
//! - *Flat*: the package directory's immediate children are linked directly
//!   under the destination root (`bash/.bashrc` → `destination/.bashrc`).
//! - *Nested*: the package contains one intermediate layout directory (e.g.
//!   `.config`) which itself contains a directory named after the package;
//!   the linked unit is `repository/package/layout/package` →
//!   `destination/layout/package`.
//!
//! Resolution never mutates the filesystem.
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// The internal layout of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Immediate children are linked directly under the destination root.
    Flat,
    /// Payload lives under an intermediate directory of the given name.
    Nested(String),
}

/// One resolved `source → target` link pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPair {
    /// The file or directory inside the repository the link points at.
    pub source: PathBuf,
    /// The path under the destination root where the link is created.
    pub target: PathBuf,
}

/// Detect which layout a package uses.
///
/// A *layout candidate* is an immediate child directory whose name differs
/// from the package name and which contains a directory named after the
/// package — the shape the nested convention requires. No candidate means
/// flat layout; exactly one means nested; more than one is ambiguous and
/// rejected rather than silently picking whichever is enumerated last.
///
/// # Errors
///
/// Returns [`ResolveError::AmbiguousLayout`] when more than one distinct
/// candidate exists, or [`ResolveError::Io`] if the package directory cannot
/// be read.
pub fn detect_layout(package_dir: &Path, package_name: &str) -> Result<Layout, ResolveError> {
    let mut candidates: Vec<String> = Vec::new();

    for entry in read_dir(package_dir)? {
        let entry = entry.map_err(|source| io_error(package_dir, source))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name != package_name && path.join(package_name).is_dir() {
            candidates.push(name);
        }
    }

    candidates.sort();
    if candidates.len() > 1 {
        return Err(ResolveError::AmbiguousLayout {
            package: package_name.to_string(),
            candidates,
        });
    }
    Ok(candidates.pop().map_or(Layout::Flat, Layout::Nested))
}

/// Resolve a package to the ordered sequence of link pairs that should exist.
///
/// Flat packages yield one pair per immediate child, sorted by file name so
/// the result is deterministic. Nested packages always yield exactly one
/// pair, `repository/package/layout/package` → `destination/layout/package`.
/// An empty package resolves to an empty sequence.
///
/// The caller is expected to have validated that `package_dir` exists and is
/// a directory.
///
/// # Errors
///
/// Returns [`ResolveError::AmbiguousLayout`] when the package has more than
/// one candidate layout directory, or [`ResolveError::Io`] if a directory
/// cannot be enumerated.
pub fn resolve(
    package_dir: &Path,
    destination_root: &Path,
    repository_root: &Path,
) -> Result<Vec<LinkPair>, ResolveError> {
    let Some(package_name) = package_dir.file_name() else {
        return Ok(Vec::new());
    };
    let package_name = package_name.to_string_lossy().into_owned();

    match detect_layout(package_dir, &package_name)? {
        Layout::Flat => {
            let mut names: Vec<std::ffi::OsString> = Vec::new();
            for entry in read_dir(package_dir)? {
                let entry = entry.map_err(|source| io_error(package_dir, source))?;
                names.push(entry.file_name());
            }
            names.sort();
            Ok(names
                .into_iter()
                .map(|name| LinkPair {
                    source: package_dir.join(&name),
                    target: destination_root.join(&name),
                })
                .collect())
        }
        Layout::Nested(layout) => {
            tracing::debug!("package '{package_name}' uses nested layout '{layout}'");
            Ok(vec![LinkPair {
                source: repository_root
                    .join(&package_name)
                    .join(&layout)
                    .join(&package_name),
                target: destination_root.join(&layout).join(&package_name),
            }])
        }
    }
}

fn read_dir(dir: &Path) -> Result<std::fs::ReadDir, ResolveError> {
    std::fs::read_dir(dir).map_err(|source| io_error(dir, source))
}

fn io_error(path: &Path, source: std::io::Error) -> ResolveError {
    ResolveError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn make_package(repo: &Path, name: &str) -> PathBuf {
        let dir = repo.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn flat_layout_for_plain_files() {
        let repo = tempfile::tempdir().unwrap();
        let pkg = make_package(repo.path(), "bash");
        std::fs::write(pkg.join(".bashrc"), "").unwrap();

        let layout = detect_layout(&pkg, "bash").unwrap();
        assert_eq!(layout, Layout::Flat);
    }

    #[test]
    fn nested_layout_for_config_convention() {
        let repo = tempfile::tempdir().unwrap();
        let pkg = make_package(repo.path(), "rofi");
        std::fs::create_dir_all(pkg.join(".config/rofi")).unwrap();

        let layout = detect_layout(&pkg, "rofi").unwrap();
        assert_eq!(layout, Layout::Nested(".config".to_string()));
    }

    #[test]
    fn subdirectory_without_package_dir_stays_flat() {
        // A flat package may legitimately contain subdirectories; only a
        // directory that itself holds a package-named directory marks the
        // nested convention.
        let repo = tempfile::tempdir().unwrap();
        let pkg = make_package(repo.path(), "bash");
        std::fs::create_dir_all(pkg.join("scripts")).unwrap();
        std::fs::write(pkg.join(".bashrc"), "").unwrap();

        let layout = detect_layout(&pkg, "bash").unwrap();
        assert_eq!(layout, Layout::Flat);
    }

    #[test]
    fn ambiguous_layout_is_rejected() {
        let repo = tempfile::tempdir().unwrap();
        let pkg = make_package(repo.path(), "app");
        std::fs::create_dir_all(pkg.join(".config/app")).unwrap();
        std::fs::create_dir_all(pkg.join(".local/app")).unwrap();

        let err = detect_layout(&pkg, "app").unwrap_err();
        match err {
            ResolveError::AmbiguousLayout {
                package,
                candidates,
            } => {
                assert_eq!(package, "app");
                assert_eq!(candidates, vec![".config", ".local"]);
            }
            ResolveError::Io { .. } => panic!("expected AmbiguousLayout, got {err}"),
        }
    }

    #[test]
    fn flat_resolution_yields_sorted_pairs() {
        let repo = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let pkg = make_package(repo.path(), "bash");
        std::fs::write(pkg.join(".bashrc"), "").unwrap();
        std::fs::write(pkg.join(".bash_profile"), "").unwrap();

        let pairs = resolve(&pkg, dest.path(), repo.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].source, pkg.join(".bash_profile"));
        assert_eq!(pairs[0].target, dest.path().join(".bash_profile"));
        assert_eq!(pairs[1].source, pkg.join(".bashrc"));
        assert_eq!(pairs[1].target, dest.path().join(".bashrc"));
    }

    #[test]
    fn nested_resolution_yields_single_pair() {
        let repo = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let pkg = make_package(repo.path(), "rofi");
        std::fs::create_dir_all(pkg.join(".config/rofi")).unwrap();
        std::fs::write(pkg.join(".config/rofi/config.rasi"), "").unwrap();

        let pairs = resolve(&pkg, dest.path(), repo.path()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].source, repo.path().join("rofi/.config/rofi"));
        assert_eq!(pairs[0].target, dest.path().join(".config/rofi"));
    }

    #[test]
    fn empty_package_resolves_to_no_pairs() {
        let repo = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let pkg = make_package(repo.path(), "empty");

        let pairs = resolve(&pkg, dest.path(), repo.path()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn missing_package_dir_is_io_error() {
        let repo = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let pkg = repo.path().join("nonexistent");

        let err = resolve(&pkg, dest.path(), repo.path()).unwrap_err();
        assert!(matches!(err, ResolveError::Io { .. }));
    }
}
