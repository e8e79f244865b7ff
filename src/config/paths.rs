use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "errnotify";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "ERRNOTIFY_CONFIG";
/// Overrides the directory that holds the log file.
pub const STATE_ENV: &str = "ERRNOTIFY_STATE";

/// Where errnotify keeps its config file and log output.
pub struct Paths;

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory { path: PathBuf, source: io::Error },
}

impl Paths {
    /// `$ERRNOTIFY_CONFIG`, else `<platform config dir>/errnotify/config.toml`.
    pub fn config_file() -> PathBuf {
        config_file_from(env::var_os(CONFIG_ENV), dirs::config_dir())
    }

    /// Creates the log directory if needed and returns it.
    ///
    /// Platforms without a state directory (everything but Linux) log next to
    /// the config file.
    pub fn ensure_state_dir() -> Result<PathBuf, PathError> {
        let dir = state_dir_from(
            env::var_os(STATE_ENV),
            dirs::state_dir(),
            &Self::config_file(),
        );
        fs::create_dir_all(&dir).map_err(|source| PathError::CreateDirectory {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }
}

fn config_file_from(overridden: Option<OsString>, platform_config: Option<PathBuf>) -> PathBuf {
    match overridden {
        Some(path) => PathBuf::from(path),
        None => platform_config
            .unwrap_or_default()
            .join(APP_DIR)
            .join(CONFIG_FILE_NAME),
    }
}

fn state_dir_from(
    overridden: Option<OsString>,
    platform_state: Option<PathBuf>,
    config_file: &Path,
) -> PathBuf {
    if let Some(dir) = overridden {
        return PathBuf::from(dir);
    }
    if let Some(base) = platform_state {
        return base.join(APP_DIR);
    }
    config_file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ENV_LOCK;

    #[test]
    fn config_override_is_used_verbatim() {
        let file = config_file_from(
            Some(OsString::from("/tmp/custom.toml")),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(file, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn config_file_is_namespaced_under_platform_dir() {
        let file = config_file_from(None, Some(PathBuf::from("/home/u/.config")));
        assert_eq!(file, PathBuf::from("/home/u/.config/errnotify/config.toml"));
    }

    #[test]
    fn state_dir_prefers_platform_state() {
        let dir = state_dir_from(
            None,
            Some(PathBuf::from("/home/u/.local/state")),
            Path::new("/home/u/.config/errnotify/config.toml"),
        );
        assert_eq!(dir, PathBuf::from("/home/u/.local/state/errnotify"));
    }

    #[test]
    fn state_dir_without_platform_state_follows_config_file() {
        let dir = state_dir_from(
            None,
            None,
            Path::new("/Users/u/Library/Application Support/errnotify/config.toml"),
        );
        assert_eq!(
            dir,
            PathBuf::from("/Users/u/Library/Application Support/errnotify")
        );

        let beside_cwd = state_dir_from(None, None, Path::new("config.toml"));
        assert_eq!(beside_cwd, PathBuf::from("."));
    }

    #[test]
    fn state_override_beats_everything() {
        let dir = state_dir_from(
            Some(OsString::from("/var/log/errnotify")),
            Some(PathBuf::from("/home/u/.local/state")),
            Path::new("/etc/errnotify/config.toml"),
        );
        assert_eq!(dir, PathBuf::from("/var/log/errnotify"));
    }

    #[test]
    fn ensure_state_dir_creates_overridden_directory() {
        let _lock = ENV_LOCK.lock().unwrap();
        let temp = tempfile::tempdir().unwrap();
        let state = temp.path().join("logs").join("errnotify");

        unsafe { env::set_var(STATE_ENV, &state) };
        let created = Paths::ensure_state_dir();
        unsafe { env::remove_var(STATE_ENV) };

        assert_eq!(created.unwrap(), state);
        assert!(state.is_dir());
    }
}
