//! RON rules loader
//!
//! Loads game rules from an external RON file, with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::rules::GameRules;

/// Default location of the rules file, relative to the working directory
pub const DEFAULT_RULES_PATH: &str = "assets/data/rules.ron";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rules: {0}")]
    Parse(String),
    #[error("invalid rules: {0}")]
    Invalid(String),
}

impl GameRules {
    /// Parse rules from a RON document. Missing fields keep their defaults.
    pub fn from_ron_str(content: &str) -> Result<Self, DataError> {
        let rules: Self = ron::from_str(content).map_err(|e| DataError::Parse(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load rules from a RON file
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// Load rules if the file exists, otherwise use the defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No rules file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(rules) => {
                log::info!("Loaded rules from {}", path.display());
                rules
            }
            Err(e) => {
                log::warn!("{}. Using default rules.", e);
                Self::default()
            }
        }
    }

    pub fn to_ron_string(&self) -> Result<String, DataError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| DataError::Parse(e.to_string()))
    }
}

/// Write the default rules as pretty RON, creating parent directories
pub fn export_default_rules(path: &Path) -> Result<(), DataError> {
    let io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content = GameRules::default().to_ron_string()?;
    fs::write(path, content).map_err(io_err)
}
