#![deny(unsafe_code)]

//! `foodex` - validate FoodEx2 expressions against the MTX catalogue.

mod cli;
mod commands;
mod summary;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG wins over the -v/-q flags when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(cli.verbosity.log_level_filter().to_string())
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    commands::run(cli)
}
