//! Repository manifest loading.
//!
//! A repository may carry an optional `.stow.toml` manifest at its root
//! naming the packages to reconcile when the CLI is invoked without explicit
//! package arguments:
//!
//! ```toml
//! packages = ["zsh", "bash", "tmux", "rofi"]
//! ```
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::Path;

/// File name of the repository manifest.
pub const MANIFEST_FILE: &str = ".stow.toml";

/// Parsed repository manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Packages to reconcile by default, in order.
    #[serde(default)]
    pub packages: Vec<String>,
}

/// Load the manifest from the repository root.
///
/// A missing manifest is not an error; it loads as the empty manifest.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(repository: &Path) -> Result<Manifest> {
    let path = repository.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(Manifest::default());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
