use std::time::Duration;

use tracing::debug;

use crate::notify::event::{ErrorEvent, STATUS_NOT_MODIFIED};
use crate::notify::request::{
    AutoClose, DEFAULT_AUTO_CLOSE, NotificationKind, NotificationRequest, Payload, Route,
};

pub const DEFAULT_OFFLINE_MESSAGE: &str = "No Internet Connection";
pub const DEFAULT_STACK_FILTERS: &[&str] = &["node_modules"];

const STATUS_UNPROCESSABLE: u16 = 422;
const GENERAL_MESSAGE_STATUSES: &[u16] = &[400, 401, 404, 500];

/// Configuration for the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Delay before a shown toast closes itself.
    pub auto_close: Duration,
    /// Stack lines containing any of these substrings are dropped from the debug log.
    pub stack_filters: Vec<String>,
    /// Message shown for HTTP errors raised while offline.
    pub offline_message: String,
    /// Whether toasts for unrecognized HTTP statuses close themselves.
    pub auto_close_unrecognized_status: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            auto_close: DEFAULT_AUTO_CLOSE,
            stack_filters: DEFAULT_STACK_FILTERS
                .iter()
                .map(|filter| filter.to_string())
                .collect(),
            offline_message: DEFAULT_OFFLINE_MESSAGE.to_string(),
            auto_close_unrecognized_status: false,
        }
    }
}

/// Maps an error to the notification that should be shown for it.
///
/// Classification is total: every input yields exactly one request.
#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier {
    config: ClassifierConfig,
}

impl ErrorClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify an error given the current connectivity state.
    pub fn classify(&self, error: &ErrorEvent, online: bool) -> NotificationRequest {
        let request = if error.is_http_origin() {
            self.classify_http(error, online)
        } else {
            self.request(
                NotificationKind::GeneralMessage,
                Payload::Message(error.user_message()),
                Route::NonHttp,
            )
        };
        debug!(
            kind = request.kind.as_str(),
            route = ?request.route,
            "Classified error"
        );
        request
    }

    fn classify_http(&self, error: &ErrorEvent, online: bool) -> NotificationRequest {
        if !online {
            return self.request(
                NotificationKind::GeneralMessage,
                Payload::Message(self.config.offline_message.clone()),
                Route::Offline,
            );
        }

        match error.status() {
            Some(STATUS_NOT_MODIFIED) => NotificationRequest::suppressed(Route::NotModified),
            Some(STATUS_UNPROCESSABLE) => self.request(
                NotificationKind::FormErrors,
                Payload::Error(error.clone()),
                Route::FormErrors,
            ),
            Some(status) if GENERAL_MESSAGE_STATUSES.contains(&status) => self.request(
                NotificationKind::GeneralMessage,
                Payload::Error(error.clone()),
                Route::KnownStatus(status),
            ),
            status => {
                let mut request = self.request(
                    NotificationKind::GeneralMessage,
                    Payload::Error(error.clone()),
                    Route::UnrecognizedStatus(status),
                );
                if !self.config.auto_close_unrecognized_status {
                    request.auto_close = AutoClose::Never;
                }
                request
            }
        }
    }

    fn request(&self, kind: NotificationKind, payload: Payload, route: Route) -> NotificationRequest {
        NotificationRequest {
            kind,
            payload,
            auto_close: AutoClose::After(self.config.auto_close),
            route,
        }
    }

    /// Stack trace with filtered lines removed, joined for logging.
    ///
    /// Returns `None` when the error carries no stack.
    pub fn filtered_stack(&self, error: &ErrorEvent) -> Option<String> {
        error
            .stack()
            .map(|stack| clean_stack(stack, &self.config.stack_filters).join("\n"))
    }
}

/// Drops every line containing any of `filters`.
pub fn clean_stack<S: AsRef<str>>(lines: &[String], filters: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| {
            !filters.iter().any(|word| {
                let word: &str = word.as_ref();
                line.contains(word)
            })
        })
        .cloned()
        .collect()
}
