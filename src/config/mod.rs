//! Configuration management module.

pub mod paths;
pub mod schema;
pub mod validation;

use std::fs;
use std::path::{Path, PathBuf};

pub use paths::{PathError, Paths};
pub use schema::{Config, LoggingConfig, NotificationsConfig};
pub use validation::{
    ValidationError, ValidationResult, ValidationWarning, validate_config, validate_notifications,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads the config file at the platform path, or defaults when it is missing.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Paths::config_file())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[notifications\nauto_close_ms = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn loads_values_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[notifications]\noffline_message = \"Offline\"\nstack_filters = [\"vendor\"]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.notifications.offline_message, "Offline");
        assert_eq!(config.notifications.stack_filters, vec!["vendor"]);
        assert_eq!(config.notifications.auto_close_ms, 3000);
    }
}
