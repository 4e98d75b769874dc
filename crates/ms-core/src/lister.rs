//! Directory listing

use crate::error::{ScaffoldError, ScaffoldResult};
use std::path::Path;

/// List the names of all entries (files and directories) directly inside `dir`.
///
/// Entries are returned in the order the OS yields them. Names that are not
/// valid UTF-8 are converted lossily.
pub async fn list_entries(dir: &Path) -> ScaffoldResult<Vec<String>> {
    let read_error = |source: std::io::Error| ScaffoldError::DirectoryRead {
        path: dir.display().to_string(),
        source,
    };

    let mut read_dir = tokio::fs::read_dir(dir).await.map_err(read_error)?;
    let mut names = Vec::new();
    while let Some(entry) = read_dir.next_entry().await.map_err(read_error)? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    log::debug!("Found {} entries in {}", names.len(), dir.display());
    Ok(names)
}

#[cfg(test)]
#[path = "lister_test.rs"]
mod tests;
