//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Spectre build configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Build mode used for .env file discovery (e.g., development, production)
    #[arg(short, long, global = true, default_value = "production")]
    pub mode: String,

    /// Directory searched for .env files (default: current directory)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub env_dir: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved build configuration as JSON
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// Validate the resolved build configuration
    #[command(visible_alias = "c")]
    Check,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Output single-line JSON instead of pretty-printed
    #[arg(short, long)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        // Catches duplicate flags, including clashes with the
        // auto-registered -V/--version on the root command.
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_short_flag() {
        let cli = Cli::try_parse_from(["spectre-config", "-v", "check"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }
}
