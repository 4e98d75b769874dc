//! Scaffolding a new migration: derive, create, report

use crate::config::{ReportTiming, ScaffoldConfig};
use crate::creator::create_migration;
use crate::deriver::derive_next;
use crate::error::{ScaffoldError, ScaffoldResult};
use std::path::PathBuf;

/// What to scaffold and where
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// The migrations directory; must already exist
    pub dir: PathBuf,

    /// Optional free-form text appended to the number as `<NNN>-<description>`
    pub description: Option<String>,

    /// Derive and report the number without creating anything
    pub dry_run: bool,
}

impl ScaffoldRequest {
    /// Request a bare `<NNN>` migration in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            description: None,
            dry_run: false,
        }
    }
}

/// Result of a scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// The derived migration number, e.g. `"004"`
    pub number: String,

    /// Directory name, the number optionally followed by `-<description>`
    pub name: String,

    /// Full path of the migration directory
    pub path: PathBuf,

    /// Whether the directory was created (false on dry runs)
    pub created: bool,
}

/// Derive the next migration number in `request.dir` and create its directory.
///
/// `report` receives the derived number once. With
/// [`ReportTiming::AfterCreate`] it is only called when creation succeeded;
/// with [`ReportTiming::BeforeCreate`] it is called before creation is
/// attempted. Nothing is created or reported when derivation fails.
pub async fn scaffold<F>(
    request: &ScaffoldRequest,
    config: &ScaffoldConfig,
    mut report: F,
) -> ScaffoldResult<ScaffoldOutcome>
where
    F: FnMut(&str),
{
    let description = request
        .description
        .as_deref()
        .map(normalize_description)
        .transpose()?;

    let number = derive_next(&request.dir, config).await?;
    let name = match &description {
        Some(description) => format!("{number}-{description}"),
        None => number.clone(),
    };
    let path = request.dir.join(&name);

    if request.dry_run {
        log::debug!("Dry run: would create {}", path.display());
        report(&number);
        return Ok(ScaffoldOutcome {
            number,
            name,
            path,
            created: false,
        });
    }

    if config.report == ReportTiming::BeforeCreate {
        report(&number);
    }
    let path = create_migration(&request.dir, &name).await?;
    if config.report == ReportTiming::AfterCreate {
        report(&number);
    }

    Ok(ScaffoldOutcome {
        number,
        name,
        path,
        created: true,
    })
}

/// Turn a description into a single path component.
///
/// Surrounding whitespace is trimmed and inner whitespace runs become `-`.
fn normalize_description(raw: &str) -> ScaffoldResult<String> {
    let invalid = |reason: &str| ScaffoldError::InvalidDescription {
        description: raw.to_string(),
        reason: reason.to_string(),
    };

    let normalized = raw.split_whitespace().collect::<Vec<_>>().join("-");
    if normalized.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if normalized.contains('/') || normalized.contains('\\') || normalized.contains("..") {
        return Err(invalid("must not contain '/', '\\', or '..'"));
    }
    Ok(normalized)
}

#[cfg(test)]
#[path = "scaffold_test.rs"]
mod tests;
