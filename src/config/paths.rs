//! Path resolution for task-intent configuration files.
//!
//! Everything lives in `~/.task-intent/`:
//! - `config.yaml` - Main configuration file
//! - `keywords/` - Custom keyword tables (YAML files)

use std::path::{Path, PathBuf};

use crate::error::IntentError;

/// Paths to task-intent configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.task-intent/`
    pub root: PathBuf,
    /// Config file: `~/.task-intent/config.yaml`
    pub config_file: PathBuf,
    /// Keyword tables directory: `~/.task-intent/keywords/`
    pub keywords: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, IntentError> {
        let home = std::env::var("HOME").map_err(|_| {
            IntentError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".task-intent")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            keywords: root.join("keywords"),
            root,
        }
    }

    /// Resolve a keyword table path from the config file.
    ///
    /// Relative paths are looked up in the keywords directory.
    #[must_use]
    pub fn keywords_file(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.keywords.join(file)
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".task-intent")))
    }
}
