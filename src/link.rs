//! Idempotent symlink primitive (check + apply pattern).
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// State of the path a link resource wants to occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing exists at the target path.
    Missing,
    /// The target is a symlink that already points at the source.
    Correct,
    /// The target is a symlink pointing somewhere else.
    Incorrect {
        /// The path the existing link currently points at.
        current: PathBuf,
    },
    /// The target exists as a real file or directory, not a symlink.
    Conflict,
}

/// A symlink that can be checked, ensured, and removed.
#[derive(Debug, Clone)]
pub struct LinkResource {
    /// The file/directory the symlink points to.
    pub source: PathBuf,
    /// The path where the symlink lives.
    pub target: PathBuf,
}

impl LinkResource {
    /// Create a new link resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }

    /// Human-readable description of this link.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.target.display(), self.source.display())
    }

    /// Check the current state of the target path.
    ///
    /// Correctness is a raw link-path comparison, not a canonicalized one: a
    /// link is correct exactly when `readlink(target)` equals the configured
    /// source. A broken symlink is still a symlink here and is classified as
    /// [`LinkState::Correct`] or [`LinkState::Incorrect`] by where it points.
    #[must_use]
    pub fn current_state(&self) -> LinkState {
        match std::fs::read_link(&self.target) {
            Ok(existing) => {
                if existing == self.source {
                    LinkState::Correct
                } else {
                    LinkState::Incorrect { current: existing }
                }
            }
            Err(_) => {
                if self.target.symlink_metadata().is_ok() {
                    LinkState::Conflict
                } else {
                    LinkState::Missing
                }
            }
        }
    }

    /// Make the target a symlink to the source, returning whether a change
    /// was made.
    ///
    /// A correct link is left untouched. A link pointing elsewhere is
    /// unlinked and recreated. A real file or directory at the target is
    /// renamed to a sibling conflict backup (see [`backup_path`]) before the
    /// link is created. At most one unlink, one rename, and one symlink
    /// creation happen per call.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the
    /// existing target cannot be removed or renamed, or the symlink cannot
    /// be created.
    pub fn ensure(&self) -> Result<bool> {
        match self.current_state() {
            LinkState::Correct => Ok(false),
            LinkState::Missing => {
                ensure_parent_dir(&self.target)?;
                self.create()?;
                Ok(true)
            }
            LinkState::Incorrect { current } => {
                tracing::debug!(
                    "relinking {}: was {}",
                    self.target.display(),
                    current.display()
                );
                std::fs::remove_file(&self.target)
                    .with_context(|| format!("remove existing link: {}", self.target.display()))?;
                self.create()?;
                Ok(true)
            }
            LinkState::Conflict => {
                let backup = backup_path(&self.target);
                tracing::debug!(
                    "backing up {} to {}",
                    self.target.display(),
                    backup.display()
                );
                std::fs::rename(&self.target, &backup).with_context(|| {
                    format!(
                        "back up {} to {}",
                        self.target.display(),
                        backup.display()
                    )
                })?;
                self.create()?;
                Ok(true)
            }
        }
    }

    /// Remove the symlink at the target, returning whether one was removed.
    ///
    /// Anything that is not a symlink — a regular file, a real directory, or
    /// nothing at all — is left untouched and reported as unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is a symlink but cannot be unlinked.
    pub fn remove(&self) -> Result<bool> {
        let is_symlink = self
            .target
            .symlink_metadata()
            .is_ok_and(|m| m.file_type().is_symlink());
        if !is_symlink {
            return Ok(false);
        }
        std::fs::remove_file(&self.target)
            .with_context(|| format!("remove link: {}", self.target.display()))?;
        Ok(true)
    }

    fn create(&self) -> Result<()> {
        std::os::unix::fs::symlink(&self.source, &self.target).with_context(|| {
            format!(
                "create link: {} -> {}",
                self.target.display(),
                self.source.display()
            )
        })
    }
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Pick a collision-free backup path for a displaced target.
///
/// The base name is `<target>.conflict.bak`, sibling to the target. When that
/// path is already occupied a counter is appended (`.1`, `.2`, …) until a
/// free name is found, so an earlier backup is never overwritten.
#[must_use]
pub fn backup_path(target: &Path) -> PathBuf {
    let mut base = target.as_os_str().to_os_string();
    base.push(".conflict.bak");
    let base = PathBuf::from(base);
    if base.symlink_metadata().is_err() {
        return base;
    }
    let mut n = 1u32;
    loop {
        let mut candidate = base.clone().into_os_string();
        candidate.push(format!(".{n}"));
        let candidate = PathBuf::from(candidate);
        if candidate.symlink_metadata().is_err() {
            return candidate;
        }
        n += 1;
    }
}
