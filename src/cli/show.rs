//! Show command implementation.
//!
//! Serializes the resolved build configuration to stdout as JSON, so CI
//! pipelines and the downstream build can inspect exactly what was assembled.

use std::io::Write;

use anyhow::Result;

use crate::cli::args::ShowArgs;
use crate::config::BuildConfiguration;

/// Execute show command
pub fn run_show(args: &ShowArgs, config: &BuildConfiguration) -> Result<()> {
    let json = if args.compact {
        serde_json::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
