//! Spectre config - build configuration assembler for the spectre portfolio site.

#![allow(dead_code)]

mod cli;
mod config;
mod env;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{BuildConfiguration, init_config};
use env::EnvSnapshot;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Snapshot the environment once, before any build work begins.
    let env_dir = match &cli.env_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let snapshot = EnvSnapshot::load(&cli.mode, &env_dir, "");
    debug!("env"; "loaded {} variables (mode: {})", snapshot.len(), cli.mode);

    let config = init_config(BuildConfiguration::assemble(&snapshot));

    match &cli.command {
        Commands::Show { args } => cli::show::run_show(args, &config),
        Commands::Check => cli::check::run_check(&config),
    }
}
