use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::notify::classifier::{ClassifierConfig, DEFAULT_OFFLINE_MESSAGE, DEFAULT_STACK_FILTERS};
use crate::theme::ThemeState;

/// Root configuration for errnotify.
///
/// Example:
/// ```toml
/// [logging]
/// log_level = "info"
///
/// [notifications]
/// auto_close_ms = 3000
///
/// [theme]
/// dark = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// Logging configuration section.
    /// Example: [logging]
    pub logging: LoggingConfig,
    /// Error notification configuration section.
    /// Example: [notifications]
    pub notifications: NotificationsConfig,
    /// Initial theme state.
    /// Example: [theme]
    pub theme: ThemeState,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    /// Example: log_level = "info"
    pub log_level: String,
    /// Emit JSON log lines.
    /// Example: json = false
    pub json: bool,
    /// Also append logs to the state directory.
    /// Example: log_to_file = false
    pub log_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
            log_to_file: false,
        }
    }
}

/// Error notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Delay before a toast closes itself (milliseconds).
    /// Example: auto_close_ms = 3000
    pub auto_close_ms: u64,
    /// Stack lines containing any of these substrings are not logged.
    /// Example: stack_filters = ["node_modules"]
    pub stack_filters: Vec<String>,
    /// Message shown for HTTP errors while offline.
    /// Example: offline_message = "No Internet Connection"
    pub offline_message: String,
    /// Close toasts for unrecognized HTTP statuses too.
    /// Example: auto_close_unrecognized_status = false
    pub auto_close_unrecognized_status: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: 3000,
            stack_filters: DEFAULT_STACK_FILTERS
                .iter()
                .map(|filter| filter.to_string())
                .collect(),
            offline_message: DEFAULT_OFFLINE_MESSAGE.to_string(),
            auto_close_unrecognized_status: false,
        }
    }
}

impl NotificationsConfig {
    pub fn classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            auto_close: Duration::from_millis(self.auto_close_ms),
            stack_filters: self.stack_filters.clone(),
            offline_message: self.offline_message.clone(),
            auto_close_unrecognized_status: self.auto_close_unrecognized_status,
        }
    }
}
