//! bdbuild - a build tool for BetterDiscord themes and plugins.

#![allow(dead_code)]

mod cli;
mod config;
mod install;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Build { build_args } => {
            let mut config = ProjectConfig::load(&cli.config)?;
            config.apply_overrides(build_args);
            cli::build::build_project(&config)
        }
    }
}
