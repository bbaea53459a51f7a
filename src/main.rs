//! Binary entry point for the `stow` CLI.

use anyhow::Result;
use clap::Parser;

use stow_cli::cli;
use stow_cli::commands;
use stow_cli::logging;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    match args.command {
        cli::Command::Apply(opts) => commands::apply::run(&args.global, &opts),
        cli::Command::Completions(opts) => {
            commands::completions::run(&opts);
            Ok(())
        }
        cli::Command::Version => {
            let version = option_env!("STOW_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("stow {version}");
            Ok(())
        }
    }
}
