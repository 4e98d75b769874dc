//! Scaffold command implementation - creates the next numbered migration directory

use anyhow::Result;
use ms_core::{scaffold, ScaffoldRequest};

use crate::cli::Cli;
use crate::commands::common::{load_config, ExitCode};

/// Printed when no migrations directory is given.
pub(crate) const USAGE: &str = "Usage: migseq <path-to-migration-dir>";

/// Execute the scaffold command
pub(crate) async fn execute(cli: &Cli) -> Result<()> {
    let Some(migration_dir) = &cli.migration_dir else {
        println!("{USAGE}");
        return Err(ExitCode(1).into());
    };

    let config = load_config(&cli.global, &cli.scaffold)?;
    let request = ScaffoldRequest {
        dir: migration_dir.clone(),
        description: cli.scaffold.description.clone(),
        dry_run: cli.scaffold.dry_run,
    };

    let outcome = scaffold(&request, &config, |number| println!("LMS: {number}")).await?;
    if outcome.created {
        log::debug!("Migration {} ready at {}", outcome.name, outcome.path.display());
    }

    Ok(())
}

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;
