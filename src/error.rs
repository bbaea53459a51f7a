//! Domain-specific error types for the symlink engine.
//!
//! Resolution failures are typed with [`thiserror`] so callers can match on
//! them; filesystem failures during reconciliation are propagated as
//! [`anyhow::Error`] with context attached at each call site, and the CLI
//! boundary reports the raw error chain.

use thiserror::Error;

/// Errors that arise while resolving a package to its link pairs.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The package contains more than one candidate layout directory, so the
    /// nested-layout convention cannot be applied unambiguously.
    #[error("Package '{package}' has an ambiguous layout: candidate directories {}", .candidates.join(", "))]
    AmbiguousLayout {
        /// Name of the package that failed to resolve.
        package: String,
        /// Candidate layout directory names, sorted for stable messages.
        candidates: Vec<String>,
    },

    /// An I/O error occurred while enumerating the package directory.
    #[error("IO error reading package directory {path}: {source}")]
    Io {
        /// Path of the directory that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
