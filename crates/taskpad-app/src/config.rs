use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_DIR: &str = "taskpad";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Errors raised while loading the application configuration.
///
/// Unlike the task slot, the config file is user-authored, so problems
/// with it are reported instead of silently defaulted away.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse {path}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// `page_size` must be at least 1.
    #[error("page_size must be at least 1")]
    ZeroPageSize,
}

/// Application configuration loaded from `<config-dir>/taskpad/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Items per page in paginated views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Override for the task slot location.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform default location, falling
    /// back to defaults when no file exists (or no config directory can
    /// be resolved at all).
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed, or
    /// fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        dirs::config_dir().map_or_else(
            || Ok(Self::default()),
            |base| Self::from_path(base.join(CONFIG_DIR).join(CONFIG_FILE)),
        )
    }

    /// Load configuration from a known file path, defaulting when the
    /// file is absent.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or fails
    /// validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    const fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, body).unwrap_or_else(|err| panic!("write config: {err}"));
        path
    }

    #[test]
    fn absent_file_yields_defaults() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let config = AppConfig::from_path(dir.path().join("missing.toml"))
            .unwrap_or_else(|err| panic!("load: {err}"));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn explicit_values_are_loaded() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let path = write_config(dir.path(), "page_size = 10\ndata_path = \"/tmp/tasks.json\"\n");

        let config = AppConfig::from_path(path).unwrap_or_else(|err| panic!("load: {err}"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.data_path.as_deref(), Some(Path::new("/tmp/tasks.json")));
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let path = write_config(dir.path(), "page_size = 2\n");

        let config = AppConfig::from_path(path).unwrap_or_else(|err| panic!("load: {err}"));
        assert_eq!(config.page_size, 2);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let path = write_config(dir.path(), "page_size = 0\n");
        assert!(matches!(
            AppConfig::from_path(path),
            Err(ConfigError::ZeroPageSize)
        ));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let path = write_config(dir.path(), "page_size = \"many\"\n");
        assert!(matches!(
            AppConfig::from_path(path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
