use crate::config::schema::{Config, NotificationsConfig};

const LONG_AUTO_CLOSE_MS: u64 = 60_000;

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

#[derive(Debug)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

pub fn validate_config(config: &Config) -> ValidationResult {
    let mut result = validate_notifications(&config.notifications);
    validate_log_level(&config.logging.log_level, &mut result.errors);
    result
}

/// Checks only the `[notifications]` section.
pub fn validate_notifications(notifications: &NotificationsConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if notifications.auto_close_ms == 0 {
        errors.push(ValidationError {
            field: "notifications.auto_close_ms".to_string(),
            message: "Auto-close delay must be positive".to_string(),
            suggestion: Some("Use a value of at least 1 ms (default: 3000)".to_string()),
        });
    } else if notifications.auto_close_ms > LONG_AUTO_CLOSE_MS {
        warnings.push(ValidationWarning {
            field: "notifications.auto_close_ms".to_string(),
            message: format!(
                "Toasts stay open for {} seconds before closing",
                notifications.auto_close_ms / 1000
            ),
        });
    }

    for (index, filter) in notifications.stack_filters.iter().enumerate() {
        if filter.is_empty() {
            errors.push(ValidationError {
                field: format!("notifications.stack_filters[{index}]"),
                message: "Stack filter cannot be empty (it would drop every line)".to_string(),
                suggestion: Some("Remove the entry or use a substring such as \"node_modules\"".to_string()),
            });
        }
    }

    if notifications.offline_message.trim().is_empty() {
        errors.push(ValidationError {
            field: "notifications.offline_message".to_string(),
            message: "Offline message cannot be empty".to_string(),
            suggestion: None,
        });
    }

    if notifications.auto_close_unrecognized_status {
        warnings.push(ValidationWarning {
            field: "notifications.auto_close_unrecognized_status".to_string(),
            message: "Toasts for unrecognized HTTP statuses will close automatically".to_string(),
        });
    }

    ValidationResult { errors, warnings }
}

fn validate_log_level(level: &str, errors: &mut Vec<ValidationError>) {
    let level = level.trim().to_lowercase();
    let valid = ["trace", "debug", "info", "warn", "error"];
    if !valid.iter().any(|value| *value == level) {
        errors.push(ValidationError {
            field: "logging.log_level".to_string(),
            message: format!("Invalid log level: {level}"),
            suggestion: Some(format!("Valid levels: {}", valid.join(", "))),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_without_warnings() {
        let result = validate_config(&Config::default());
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_config_reports_invalid_log_level() {
        let mut config = Config::default();
        config.logging.log_level = "verbose".to_string();
        let result = validate_config(&config);
        assert!(result
            .errors
            .iter()
            .any(|err| err.field == "logging.log_level"));
    }

    #[test]
    fn test_validate_config_reports_zero_auto_close() {
        let mut config = Config::default();
        config.notifications.auto_close_ms = 0;
        let result = validate_config(&config);
        assert!(result
            .errors
            .iter()
            .any(|err| err.field == "notifications.auto_close_ms"));
    }

    #[test]
    fn test_validate_config_warns_on_long_auto_close() {
        let mut config = Config::default();
        config.notifications.auto_close_ms = 120_000;
        let result = validate_config(&config);
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|warning| warning.field == "notifications.auto_close_ms"));
    }

    #[test]
    fn test_validate_config_reports_empty_stack_filter() {
        let mut config = Config::default();
        config.notifications.stack_filters.push(String::new());
        let result = validate_config(&config);
        assert!(result
            .errors
            .iter()
            .any(|err| err.field == "notifications.stack_filters[1]"));
    }

    #[test]
    fn test_validate_config_reports_blank_offline_message() {
        let mut config = Config::default();
        config.notifications.offline_message = "  ".to_string();
        let result = validate_config(&config);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_validate_notifications_ignores_logging_section() {
        let mut config = Config::default();
        config.logging.log_level = "verbose".to_string();
        config.notifications.offline_message = String::new();

        let result = validate_notifications(&config.notifications);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field, "notifications.offline_message");
    }
}
