//! Studium CLI
//!
//! Command-line browser for the Studium campus catalogs.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod output;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let config = config::StudiumConfig::load(args.config.as_deref())?;
    let data_dir = args.data.clone().or_else(|| config.data.dir.clone());

    commands::run(args.command, data_dir.as_deref(), args.json)
}
