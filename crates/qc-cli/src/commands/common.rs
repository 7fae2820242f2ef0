//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use qc_core::Config;
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally empty: ExitCode is a control-flow mechanism, not a
        // user-facing error. If anyhow's Display chain ever reaches this
        // (e.g. downcast_ref fails in main.rs), we don't want "exit code N"
        // leaking into stderr.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load configuration, applying global CLI overrides.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let override_path = global.config.as_deref().map(Path::new);
    let mut config = Config::discover(override_path).context("Failed to load configuration")?;

    if let Some(dbt_dir) = &global.dbt_dir {
        config.dbt_dir = dbt_dir.clone();
    }

    Ok(config)
}

/// Print a timestamped verbose line when `--verbose` is set.
pub(crate) fn log_verbose(verbose: bool, message: impl AsRef<str>) {
    if !verbose {
        return;
    }
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    eprintln!("[{}] {}", timestamp, message.as_ref());
}
