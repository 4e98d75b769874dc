//! Migration directory creation

use crate::error::{ScaffoldError, ScaffoldResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Create the empty directory `<dir>/<name>` and return its path.
///
/// The parent must already exist. An existing entry with the same name is
/// never touched.
pub async fn create_migration(dir: &Path, name: &str) -> ScaffoldResult<PathBuf> {
    let path = dir.join(name);
    match tokio::fs::create_dir(&path).await {
        Ok(()) => {
            log::info!("Created migration directory {}", path.display());
            Ok(path)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(ScaffoldError::MigrationAlreadyExists {
                name: name.to_string(),
            })
        }
        Err(e) => Err(ScaffoldError::DirectoryCreate {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

#[cfg(test)]
#[path = "creator_test.rs"]
mod tests;
