//! Link reconciliation: desired-state dispatch over resolved link pairs.
use anyhow::Result;
use std::path::Path;

use crate::link::LinkResource;
use crate::report::Report;
use crate::resolve;

/// Desired state of a package's links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredState {
    /// Links must exist and point at the package sources.
    Present,
    /// Identical to [`DesiredState::Present`]; accepted for runners that
    /// distinguish install from update.
    Latest,
    /// Links must not exist.
    Absent,
    /// Do nothing, by explicit operator request.
    Suppress,
}

impl DesiredState {
    /// All recognized state values, in the order they are documented.
    pub const VALUES: [&'static str; 4] = ["present", "absent", "latest", "suppress"];

    /// Parse a wire-level state string; `None` for unrecognized values.
    #[must_use]
    pub fn parse(state: &str) -> Option<Self> {
        match state {
            "present" => Some(Self::Present),
            "latest" => Some(Self::Latest),
            "absent" => Some(Self::Absent),
            "suppress" => Some(Self::Suppress),
            _ => None,
        }
    }

    /// The wire-level string for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Latest => "latest",
            Self::Absent => "absent",
            Self::Suppress => "suppress",
        }
    }
}

/// Reconcile one package's links against the destination.
///
/// Checks that `repository/package` is a valid directory, resolves the
/// package to its link pairs, and dispatches on `state`:
///
/// - `present` / `latest` — ensure every link exists and is correct
/// - `absent` — remove every link that exists
/// - `suppress` — no filesystem access beyond the precondition check
/// - anything else — informational no-op, never fatal
///
/// An invalid package and an unrecognized state are normal (non-error)
/// results; only filesystem failures and ambiguous package layouts surface
/// as errors.
///
/// There is no locking between the precondition check, resolution, and
/// mutation; callers must serialize invocations that target the same
/// destination.
///
/// # Errors
///
/// Returns an error if the package layout is ambiguous or a filesystem
/// operation (enumerate, unlink, rename, symlink) fails.
pub fn process(
    repository: &Path,
    package: &str,
    destination: &Path,
    state: &str,
) -> Result<Report> {
    let mut report = Report::new();

    let package_dir = repository.join(package);
    if !package_dir.is_dir() {
        report
            .messages
            .push(format!("Source '{package}' is not a valid directory."));
        return Ok(report);
    }

    let Some(state) = DesiredState::parse(state) else {
        report.messages.push(format!("Unknown state: {state}"));
        return Ok(report);
    };

    if state == DesiredState::Suppress {
        report
            .messages
            .push("Operation was suppressed by user request.".to_string());
        return Ok(report);
    }

    let pairs = resolve::resolve(&package_dir, destination, repository)?;
    if pairs.is_empty() {
        report
            .messages
            .push(format!("Package '{package}' contains no entries to link."));
        return Ok(report);
    }

    for pair in pairs {
        let link = LinkResource::new(pair.source, pair.target);
        if state == DesiredState::Absent {
            if link.remove()? {
                report.changed = true;
                report
                    .messages
                    .push(format!("Removed link: {}", link.target.display()));
            }
        } else if link.ensure()? {
            report.changed = true;
            report.messages.push(format!(
                "Created link: {} -> {}",
                link.target.display(),
                link.source.display()
            ));
        }
    }

    Ok(report)
}
