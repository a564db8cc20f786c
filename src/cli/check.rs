//! Check command implementation.
//!
//! Runs the validation pass over the assembled configuration and reports
//! all collected diagnostics at once.

use anyhow::Result;

use crate::config::{BuildConfiguration, ConfigError};
use crate::log;

/// Execute check command
pub fn run_check(config: &BuildConfiguration) -> Result<()> {
    match config.validate() {
        Ok(()) => {
            log!("check"; "configuration ok");
            Ok(())
        }
        Err(diag) => Err(ConfigError::Diagnostics(diag).into()),
    }
}
