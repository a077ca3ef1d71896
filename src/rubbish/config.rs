//! # Configuration
//!
//! Each front end reads one TOML file:
//!
//! ```toml
//! fixityStorePath = "~/.local/share/rubbish"
//! dontExpandHome = false
//! ```
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `fixityStorePath` | platform data dir | Root of the fixity store (versions + index) |
//! | `dontExpandHome` | `false` | Take a leading `~` in `fixityStorePath` literally |
//!
//! A missing file is not an error: the defaults are used. A file that exists
//! but does not parse, or that sets `fixityStorePath` to an empty string, is.

use crate::error::{Result, RubbishError};
use crate::fixity::disk::DiskFixity;
use crate::store::whala::Whala;
use crate::store::Store;
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubbishConfig {
    #[serde(default)]
    pub dont_expand_home: bool,

    #[serde(default)]
    pub fixity_store_path: String,
}

impl RubbishConfig {
    /// Load the config at `path`, or defaults for `app_name` when it does not exist.
    pub fn load(path: &Path, app_name: &str) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::defaults(app_name);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RubbishError::Config(format!("failed to open config {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            RubbishError::Config(format!(
                "failed to unmarshal config {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| RubbishError::Config(format!("failed to unmarshal config: {}", e)))
    }

    pub fn defaults(app_name: &str) -> Result<Self> {
        let dirs = ProjectDirs::from("", "", app_name).ok_or_else(|| {
            RubbishError::Config("could not determine a data directory".to_string())
        })?;
        Ok(Self {
            dont_expand_home: false,
            fixity_store_path: dirs.data_dir().to_string_lossy().into_owned(),
        })
    }

    /// Resolved root directory of the fixity store.
    pub fn store_path(&self) -> Result<PathBuf> {
        if self.fixity_store_path.is_empty() {
            return Err(RubbishError::Config(
                "missing required config value: fixityStorePath".to_string(),
            ));
        }
        if self.dont_expand_home {
            Ok(PathBuf::from(&self.fixity_store_path))
        } else {
            expand_home(&self.fixity_store_path)
        }
    }
}

/// Replace a leading `~` with the user's home directory.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(path)),
    };

    let dirs = BaseDirs::new()
        .ok_or_else(|| RubbishError::Config("could not determine home directory".to_string()))?;
    let home = dirs.home_dir();
    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else {
        Ok(home.join(rest))
    }
}

/// Build the store a config describes.
pub fn open_store(config: &RubbishConfig) -> Result<Box<dyn Store>> {
    let root = config.store_path()?;
    debug!(root = %root.display(), "opening fixity store");
    Ok(Box::new(Whala::new(DiskFixity::new(root))))
}
