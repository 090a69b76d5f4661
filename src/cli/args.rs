//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// bdbuild - BetterDiscord theme/plugin build tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: bdproject.toml)
    #[arg(short = 'C', long, default_value = "bdproject.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the theme or plugin artifact
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Minify the artifact content (overrides `options.doMinify`)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Copy the artifact into the BetterDiscord folder after the build
    /// (overrides `options.autoMoveToBetterDiscordFolder`)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub install: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_build() {
        let cli = Cli::parse_from(["bdbuild", "build"]);
        assert!(matches!(cli.command, Commands::Build { .. }));
        assert_eq!(cli.config, PathBuf::from("bdproject.toml"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_build_overrides() {
        let cli = Cli::parse_from(["bdbuild", "build", "--minify", "--install=false"]);
        let Commands::Build { build_args } = cli.command;
        assert_eq!(build_args.minify, Some(true));
        assert_eq!(build_args.install, Some(false));
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["bdbuild", "-C", "projects/my.toml", "build"]);
        assert_eq!(cli.config, PathBuf::from("projects/my.toml"));
    }
}
