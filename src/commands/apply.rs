//! The `apply` command: reconcile package links against the destination.
use anyhow::Result;
use std::path::PathBuf;

use crate::cli::{ApplyOpts, GlobalOpts};
use crate::config;
use crate::reconcile;
use crate::report::Report;

/// Run the apply command.
///
/// Resolves the repository and destination, determines the package list
/// (explicit arguments, or the repository manifest when none are given),
/// reconciles each package in order, and prints the merged result — message
/// lines on stdout, or a single JSON object with `--json`.
///
/// # Errors
///
/// Returns an error if the repository or destination cannot be determined,
/// the manifest is needed but missing or malformed, or reconciliation hits a
/// filesystem failure or an ambiguous package layout.
pub fn run(global: &GlobalOpts, opts: &ApplyOpts) -> Result<()> {
    let repository = resolve_repository(global)?;
    let destination = resolve_target(global)?;
    tracing::debug!("repository: {}", repository.display());
    tracing::debug!("destination: {}", destination.display());

    let packages = if opts.packages.is_empty() {
        let manifest = config::load(&repository)?;
        if manifest.packages.is_empty() {
            anyhow::bail!(
                "no packages given and no manifest at {}",
                repository.join(config::MANIFEST_FILE).display()
            );
        }
        tracing::debug!("using {} manifest package(s)", manifest.packages.len());
        manifest.packages
    } else {
        opts.packages.clone()
    };

    let mut aggregate = Report::new();
    for package in &packages {
        tracing::debug!("processing package: {package}");
        let report = reconcile::process(&repository, package, &destination, &opts.state)?;
        aggregate.merge(report);
    }

    if global.json {
        println!("{}", aggregate.to_json()?);
    } else {
        for message in &aggregate.messages {
            println!("{message}");
        }
        tracing::info!(
            "{} package(s): {}",
            packages.len(),
            if aggregate.changed { "changed" } else { "unchanged" }
        );
    }
    Ok(())
}

/// Resolve the repository root from CLI arguments or the environment.
///
/// Precedence: `--repository` flag, `STOW_DIR`, then the current directory
/// when it carries a manifest.
///
/// # Errors
///
/// Returns an error if no candidate resolves.
pub fn resolve_repository(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(ref repository) = global.repository {
        return Ok(repository.clone());
    }

    if let Ok(dir) = std::env::var("STOW_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let cwd = std::env::current_dir()?;
    if cwd.join(config::MANIFEST_FILE).is_file() {
        return Ok(cwd);
    }

    anyhow::bail!("cannot determine repository. Use --repository or set STOW_DIR")
}

/// Resolve the destination root from CLI arguments or the environment.
///
/// Precedence: `--target` flag, `STOW_TARGET`, then `HOME`.
///
/// # Errors
///
/// Returns an error if no candidate resolves.
pub fn resolve_target(global: &GlobalOpts) -> Result<PathBuf> {
    if let Some(ref target) = global.target {
        return Ok(target.clone());
    }

    for var in ["STOW_TARGET", "HOME"] {
        if let Ok(dir) = std::env::var(var) {
            return Ok(PathBuf::from(dir));
        }
    }

    anyhow::bail!("cannot determine destination. Use --target or set STOW_TARGET")
}
