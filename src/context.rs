//! Data directory and application context resolution.
//!
//! Every command works from an [`AppContext`]: the resolved data directory,
//! the config loaded from it, and the location of the template store.
//!
//! The data directory is chosen in this order:
//!
//! 1. an explicit override (the `--home` flag)
//! 2. the `MSGTPL_HOME` environment variable
//! 3. the platform data directory (`~/.local/share/msgtpl` on Linux)
//! 4. `./.msgtpl` when the platform has no data directory

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::Result;
use crate::store::JsonFileRepository;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "MSGTPL_HOME";

/// Directory name under the platform data directory.
pub const DEFAULT_DIR_NAME: &str = "msgtpl";

/// Fallback data directory when the platform provides none.
pub const FALLBACK_DIR: &str = ".msgtpl";

/// Resolved paths and configuration for one invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Directory holding `config.yaml` and, by default, the template store.
    pub data_dir: PathBuf,

    /// Loaded configuration (defaults when no config file exists).
    pub config: Config,

    /// Absolute or data-dir-relative path of the template store.
    pub store_path: PathBuf,
}

impl AppContext {
    /// Resolve the context, honouring an explicit data directory override.
    pub fn resolve(home_override: Option<&Path>) -> Result<Self> {
        Self::from_data_dir(resolve_data_dir(home_override))
    }

    /// Build the context for a known data directory.
    pub fn from_data_dir<P: Into<PathBuf>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = Config::load_or_default(data_dir.join(CONFIG_FILE_NAME))?;
        let store_path = config.store_path(&data_dir);

        debug!(
            data_dir = %data_dir.display(),
            store = %store_path.display(),
            "resolved context"
        );

        Ok(Self {
            data_dir,
            config,
            store_path,
        })
    }

    /// The template repository backing this context.
    pub fn repository(&self) -> JsonFileRepository {
        JsonFileRepository::new(&self.store_path)
    }
}

/// Pick the data directory: override, then `MSGTPL_HOME`, then platform default.
pub fn resolve_data_dir(home_override: Option<&Path>) -> PathBuf {
    if let Some(home) = home_override {
        return home.to_path_buf();
    }

    if let Ok(home) = env::var(HOME_ENV)
        && !home.trim().is_empty()
    {
        return PathBuf::from(home);
    }

    match dirs::data_dir() {
        Some(dir) => dir.join(DEFAULT_DIR_NAME),
        None => PathBuf::from(FALLBACK_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MsgtplError;
    use serial_test::serial;
    use tempfile::TempDir;

    struct EnvGuard {
        previous: Option<String>,
    }

    impl EnvGuard {
        fn set(value: Option<&str>) -> Self {
            let previous = env::var(HOME_ENV).ok();
            // SAFETY: every test that touches the environment is #[serial].
            unsafe {
                match value {
                    Some(v) => env::set_var(HOME_ENV, v),
                    None => env::remove_var(HOME_ENV),
                }
            }
            Self { previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: see EnvGuard::set.
            unsafe {
                match &self.previous {
                    Some(v) => env::set_var(HOME_ENV, v),
                    None => env::remove_var(HOME_ENV),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_override_wins_over_env() {
        let _env = EnvGuard::set(Some("/from/env"));
        let dir = resolve_data_dir(Some(Path::new("/from/flag")));
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    #[serial]
    fn test_env_used_without_override() {
        let _env = EnvGuard::set(Some("/from/env"));
        assert_eq!(resolve_data_dir(None), PathBuf::from("/from/env"));
    }

    #[test]
    #[serial]
    fn test_blank_env_falls_through() {
        let _env = EnvGuard::set(Some("   "));
        let dir = resolve_data_dir(None);
        assert_ne!(dir, PathBuf::from("   "));
        assert!(dir.ends_with(DEFAULT_DIR_NAME) || dir.ends_with(FALLBACK_DIR));
    }

    #[test]
    fn test_from_data_dir_without_config() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = AppContext::from_data_dir(temp_dir.path()).unwrap();

        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.store_path, temp_dir.path().join("templates.json"));
        assert_eq!(ctx.repository().path(), ctx.store_path.as_path());
    }

    #[test]
    fn test_from_data_dir_reads_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.yaml"),
            "store_file: store/custom.json\nplaceholder_prefix: Type\n",
        )
        .unwrap();

        let ctx = AppContext::from_data_dir(temp_dir.path()).unwrap();
        assert_eq!(ctx.config.placeholder_prefix, "Type");
        assert_eq!(ctx.store_path, temp_dir.path().join("store/custom.json"));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.yaml"), "preview_length: 0\n").unwrap();

        let err = AppContext::from_data_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, MsgtplError::ConfigError(_)));
    }
}
