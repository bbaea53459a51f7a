//! Command-line interface definitions.
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::reconcile::DesiredState;

/// Top-level CLI entry point for the symlink farm manager.
#[derive(Parser, Debug)]
#[command(
    name = "stow",
    about = "Symlink farm manager for dotfiles repositories",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Repository directory containing packages (defaults to $STOW_DIR)
    #[arg(short = 'R', long, global = true)]
    pub repository: Option<PathBuf>,

    /// Destination directory where links are created (defaults to $STOW_TARGET, then $HOME)
    #[arg(short = 't', long, global = true)]
    pub target: Option<PathBuf>,

    /// Emit the aggregate result as a JSON object on stdout
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconcile package links against the destination
    Apply(ApplyOpts),
    /// Generate shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

/// Options for the `apply` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ApplyOpts {
    /// Packages to reconcile (defaults to the repository manifest)
    pub packages: Vec<String>,

    /// Desired state for the package links
    #[arg(
        short,
        long,
        default_value = "present",
        value_parser = PossibleValuesParser::new(DesiredState::VALUES)
    )]
    pub state: String,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
