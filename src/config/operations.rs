//! Config loading, validation, and path resolution.

use super::model::Config;
use crate::error::{MsgtplError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MsgtplError::ConfigError)` - Read error, parse error, or invalid value
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MsgtplError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, using defaults when the file is absent.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MsgtplError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `store_file` must not be blank
    /// - `preview_length` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.store_file.trim().is_empty() {
            return Err(MsgtplError::ConfigError(
                "store_file must not be empty".to_string(),
            ));
        }

        if self.preview_length == 0 {
            return Err(MsgtplError::ConfigError(
                "preview_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Absolute location of the template store for a given data directory.
    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        let store = Path::new(&self.store_file);
        if store.is_absolute() {
            store.to_path_buf()
        } else {
            data_dir.join(store)
        }
    }
}
