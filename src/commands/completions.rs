//! The `completions` command: shell completion generation.
use clap::CommandFactory as _;

use crate::cli::{Cli, CompletionsOpts};

/// Write a completion script for the requested shell to stdout.
pub fn run(opts: &CompletionsOpts) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(opts.shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn bash_completions_mention_subcommands() {
        let mut cmd = Cli::command();
        let mut out: Vec<u8> = Vec::new();
        clap_complete::generate(clap_complete::Shell::Bash, &mut cmd, "stow", &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("apply"));
        assert!(script.contains("completions"));
    }
}
