//! Shared utilities for CLI commands

use anyhow::Result;
use ms_core::{ReportTiming, ScaffoldConfig, ScaffoldError};
use std::fmt;

use crate::cli::{GlobalArgs, ScaffoldArgs};

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; the caller already printed what the user needs.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Exit status for an error returned from a command.
pub(crate) fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(ExitCode(code)) = err.downcast_ref::<ExitCode>() {
        return *code;
    }
    match err.downcast_ref::<ScaffoldError>() {
        Some(scaffold_err) => scaffold_err.exit_code(),
        None => 1,
    }
}

/// Install the stderr logger. `-v` raises the default level; `RUST_LOG` wins.
pub(crate) fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Build the effective config: file values (if `--config` was given), then flags.
pub(crate) fn load_config(global: &GlobalArgs, args: &ScaffoldArgs) -> Result<ScaffoldConfig> {
    let mut config = match &global.config {
        Some(path) => ScaffoldConfig::load(path)?,
        None => ScaffoldConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(ordering) = args.ordering {
        config.ordering = ordering.into();
    }
    if args.legacy_report_order {
        config.report = ReportTiming::BeforeCreate;
    }

    config.validate()?;
    log::debug!("Effective config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
