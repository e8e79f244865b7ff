use crate::config::paths::{PathError, Paths};
use crate::config::schema::LoggingConfig;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_NAME: &str = "errnotify.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level: Level,
    pub log_to_file: bool,
    pub log_to_stderr: bool,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_to_file: false,
            log_to_stderr: true,
            json_format: false,
        }
    }
}

impl TracingConfig {
    /// Builds the tracing setup from the `[logging]` config section.
    ///
    /// `debug` forces debug level regardless of the configured one.
    pub fn from_logging(logging: &LoggingConfig, debug: bool) -> Self {
        let level = if debug {
            Level::DEBUG
        } else {
            logging.log_level.trim().parse().unwrap_or(Level::INFO)
        };
        Self {
            level,
            log_to_file: logging.log_to_file,
            log_to_stderr: true,
            json_format: logging.json,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize state directory: {0}")]
    StateDir(#[from] PathError),

    #[error("Failed to open log file {path}: {source}")]
    LogFileOpen { path: PathBuf, source: io::Error },
}

/// Keeps the subscriber installed; flushes the log file on drop.
#[derive(Debug)]
pub struct TracingGuard {
    _default_guard: tracing::subscriber::DefaultGuard,
    file: Option<Arc<Mutex<File>>>,
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            if let Ok(mut handle) = file.lock() {
                let _ = handle.flush();
            }
        }
    }
}

#[derive(Clone)]
struct SharedFile(Arc<Mutex<File>>);

impl io::Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))?
            .flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = SharedFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn fmt_layer<W>(writer: W, json: bool) -> BoxedLayer
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::SystemTime);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

pub fn init_tracing(config: &TracingConfig) -> Result<TracingGuard, TracingError> {
    let file = if config.log_to_file {
        let dir = Paths::ensure_state_dir()?;
        let path = dir.join(LOG_FILE_NAME);
        let file = File::options()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| TracingError::LogFileOpen { path, source })?;
        Some(Arc::new(Mutex::new(file)))
    } else {
        None
    };

    let mut layers: Vec<BoxedLayer> = Vec::new();
    if config.log_to_stderr {
        layers.push(fmt_layer(std::io::stderr, config.json_format));
    }
    if let Some(file) = &file {
        layers.push(fmt_layer(SharedFile(Arc::clone(file)), config.json_format));
    }

    let default_guard = tracing_subscriber::registry()
        .with(layers)
        .with(resolve_env_filter(config))
        .set_default();

    Ok(TracingGuard {
        _default_guard: default_guard,
        file,
    })
}

fn resolve_env_filter(config: &TracingConfig) -> EnvFilter {
    if config.level == Level::DEBUG {
        EnvFilter::new(Level::DEBUG.as_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::STATE_ENV;
    use crate::test_utils::ENV_LOCK;
    use std::env;

    fn warn_logging() -> LoggingConfig {
        LoggingConfig {
            log_level: "warn".to_string(),
            json: true,
            log_to_file: true,
        }
    }

    #[test]
    fn default_config_is_info_stderr_pretty() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.log_to_file);
        assert!(config.log_to_stderr);
        assert!(!config.json_format);
    }

    #[test]
    fn from_logging_parses_level_and_format() {
        let config = TracingConfig::from_logging(&warn_logging(), false);
        assert_eq!(config.level, Level::WARN);
        assert!(config.json_format);
        assert!(config.log_to_file);
    }

    #[test]
    fn from_logging_falls_back_to_info() {
        let logging = LoggingConfig {
            log_level: "verbose".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(TracingConfig::from_logging(&logging, false).level, Level::INFO);
    }

    #[test]
    fn configured_level_yields_to_rust_log_until_debug_is_forced() {
        let _lock = ENV_LOCK.lock().unwrap();

        unsafe { env::remove_var("RUST_LOG") };
        let configured = TracingConfig::from_logging(&warn_logging(), false);
        let from_config = resolve_env_filter(&configured).to_string();
        assert!(from_config.contains("warn"));
        assert!(!from_config.contains("errnotify"));

        unsafe { env::set_var("RUST_LOG", "errnotify=trace") };
        let from_env = resolve_env_filter(&configured).to_string();
        let forced = resolve_env_filter(&TracingConfig::from_logging(&warn_logging(), true));
        unsafe { env::remove_var("RUST_LOG") };

        assert!(from_env.contains("errnotify=trace"));
        assert!(forced.to_string().contains("debug"));
        assert!(!forced.to_string().contains("errnotify"));
    }

    #[test]
    fn init_tracing_writes_json_log_entry() {
        let _lock = ENV_LOCK.lock().unwrap();
        let temp = tempfile::tempdir().unwrap();

        unsafe {
            env::set_var(STATE_ENV, temp.path());
            env::remove_var("RUST_LOG");
        }

        let config = TracingConfig {
            log_to_stderr: false,
            ..TracingConfig::from_logging(&warn_logging(), false)
        };

        let guard = init_tracing(&config).unwrap();
        tracing::info!(target: "errnotify", "below the configured level");
        tracing::error!(target: "errnotify", status = 500, "toast shown");
        drop(guard);

        unsafe { env::remove_var(STATE_ENV) };

        let contents = std::fs::read_to_string(temp.path().join(LOG_FILE_NAME)).unwrap();
        assert!(contents.contains("toast shown"));
        assert!(contents.contains("\"status\":500"));
        assert!(!contents.contains("below the configured level"));
    }
}
