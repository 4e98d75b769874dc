//! Error types for ms-core

use thiserror::Error;

/// Core error type for migseq
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// M001: The migrations directory could not be listed
    #[error("[M001] Failed to read migration directory '{path}': {source}")]
    DirectoryRead {
        path: String,
        source: std::io::Error,
    },

    /// M002: The last migration entry does not start with a number
    #[error("[M002] Last migration is not a number: '{entry}' ({reason})")]
    InvalidMigrationFormat { entry: String, reason: String },

    /// M003: The derived migration directory already exists
    #[error("[M003] Migration {name} already exists")]
    MigrationAlreadyExists { name: String },

    /// M004: Creating the migration directory failed
    #[error("[M004] Failed to create migration directory '{path}': {source}")]
    DirectoryCreate {
        path: String,
        source: std::io::Error,
    },

    /// M005: The migration description cannot be used in a directory name
    #[error("[M005] Invalid migration description '{description}': {reason}")]
    InvalidDescription { description: String, reason: String },

    /// M006: Config file not found
    #[error("[M006] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// M007: Failed to read or parse the config file
    #[error("[M007] Failed to parse config '{path}': {message}")]
    ConfigParse { path: String, message: String },

    /// M008: Invalid configuration value
    #[error("[M008] Invalid config: {message}")]
    ConfigInvalid { message: String },
}

impl ScaffoldError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::DirectoryRead { .. } => 3,
            ScaffoldError::InvalidMigrationFormat { .. } => 4,
            ScaffoldError::MigrationAlreadyExists { .. } => 5,
            ScaffoldError::DirectoryCreate { .. } => 6,
            ScaffoldError::InvalidDescription { .. }
            | ScaffoldError::ConfigNotFound { .. }
            | ScaffoldError::ConfigParse { .. }
            | ScaffoldError::ConfigInvalid { .. } => 2,
        }
    }
}

/// Result type alias for ScaffoldError
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
