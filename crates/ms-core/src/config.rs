//! Scaffolding configuration and YAML loading

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::sorter::SortMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest padding width accepted; a `u64` ordinal never needs more digits.
pub const MAX_WIDTH: usize = 20;

/// Settings that shape how the next migration is derived and reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Minimum number of digits in a new migration number
    #[serde(default = "default_width")]
    pub width: usize,

    /// Ordering applied before picking the last entry
    #[serde(default)]
    pub ordering: SortMode,

    /// When the derived number is reported relative to directory creation
    #[serde(default)]
    pub report: ReportTiming,
}

/// When the operator-facing `LMS: <number>` line is emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportTiming {
    /// Report only after the directory was created, so failures print nothing
    #[default]
    AfterCreate,

    /// Report before attempting creation (legacy output)
    BeforeCreate,
}

fn default_width() -> usize {
    3
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            ordering: SortMode::default(),
            report: ReportTiming::default(),
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> ScaffoldResult<Self> {
        if !path.exists() {
            return Err(ScaffoldError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: ScaffoldConfig =
            serde_yaml::from_str(&content).map_err(|e| ScaffoldError::ConfigParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> ScaffoldResult<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(ScaffoldError::ConfigInvalid {
                message: format!(
                    "width must be between 1 and {MAX_WIDTH}, got {}",
                    self.width
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
