use std::fmt;

use serde::{Deserialize, Serialize};

/// Status code that signals a cached response rather than a failure.
pub const STATUS_NOT_MODIFIED: u16 = 304;

/// An application error handed to the notifier.
///
/// The caller constructs the variant at the boundary where the error's origin
/// is known, so the notifier never has to guess from the error's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", content = "detail", rename_all = "snake_case")]
pub enum ErrorEvent {
    /// Failed response from the application's own HTTP client.
    Http {
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stack: Option<Vec<String>>,
    },
    /// Failed request raised by a third-party API client library.
    LibraryRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<u16>,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stack: Option<Vec<String>>,
    },
    /// Any other native error value.
    Generic {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stack: Option<Vec<String>>,
    },
    /// A bare string raised as an error.
    Text(String),
}

impl ErrorEvent {
    /// HTTP error with a status code and no stack trace.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status: Some(status),
            message: message.into(),
            stack: None,
        }
    }

    /// Generic error named `Error` carrying only a message.
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            name: "Error".to_string(),
            message: Some(message.into()),
            stack: None,
        }
    }

    /// Attaches a stack trace, split into lines.
    ///
    /// Has no effect on [`ErrorEvent::Text`], which never carries a stack.
    pub fn with_stack(mut self, trace: &str) -> Self {
        let lines: Vec<String> = trace.lines().map(str::to_string).collect();
        match &mut self {
            Self::Http { stack, .. }
            | Self::LibraryRequest { stack, .. }
            | Self::Generic { stack, .. } => *stack = Some(lines),
            Self::Text(_) => {}
        }
        self
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::LibraryRequest { status, .. } => *status,
            Self::Generic { .. } | Self::Text(_) => None,
        }
    }

    pub fn is_http_origin(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::LibraryRequest { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } | Self::LibraryRequest { message, .. } => {
                Some(message.as_str()).filter(|m| !m.is_empty())
            }
            Self::Generic { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            Self::Text(text) => Some(text.as_str()),
        }
    }

    pub fn stack(&self) -> Option<&[String]> {
        match self {
            Self::Http { stack, .. }
            | Self::LibraryRequest { stack, .. }
            | Self::Generic { stack, .. } => stack.as_deref(),
            Self::Text(_) => None,
        }
    }

    /// Name reported in the log line for this error.
    pub fn name(&self) -> &str {
        match self {
            Self::Http { .. } => "HttpErrorResponse",
            Self::LibraryRequest { .. } => "RequestError",
            Self::Generic { name, .. } => name,
            Self::Text(_) => "String",
        }
    }

    /// Message shown to the user for errors without an HTTP status branch.
    ///
    /// Falls back to the JSON form of the whole event when there is no message.
    pub fn user_message(&self) -> String {
        if let Some(message) = self.message() {
            return message.to_string();
        }
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for ErrorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            other => match other.message() {
                Some(message) => write!(f, "{}: {message}", other.name()),
                None => f.write_str(other.name()),
            },
        }
    }
}

impl From<String> for ErrorEvent {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ErrorEvent {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_is_only_present_for_http_origin() {
        assert_eq!(ErrorEvent::from_status(422, "bad").status(), Some(422));
        let library = ErrorEvent::LibraryRequest {
            status: Some(404),
            message: "Not Found".to_string(),
            stack: None,
        };
        assert_eq!(library.status(), Some(404));
        assert!(library.is_http_origin());
        assert_eq!(ErrorEvent::generic("boom").status(), None);
        assert!(!ErrorEvent::generic("boom").is_http_origin());
        assert!(!ErrorEvent::from("oops").is_http_origin());
    }

    #[test]
    fn display_prefixes_name() {
        assert_eq!(
            ErrorEvent::from_status(500, "Http failure").to_string(),
            "HttpErrorResponse: Http failure"
        );
        assert_eq!(ErrorEvent::generic("boom").to_string(), "Error: boom");
        assert_eq!(ErrorEvent::from("plain").to_string(), "plain");
    }

    #[test]
    fn with_stack_splits_lines() {
        let event = ErrorEvent::generic("boom").with_stack("at a\nat b");
        assert_eq!(
            event.stack(),
            Some(&["at a".to_string(), "at b".to_string()][..])
        );
        assert_eq!(ErrorEvent::from("x").with_stack("at a").stack(), None);
    }

    #[test]
    fn user_message_falls_back_to_json() {
        let event = ErrorEvent::Generic {
            name: "TypeError".to_string(),
            message: None,
            stack: None,
        };
        let value: serde_json::Value =
            serde_json::from_str(&event.user_message()).expect("json fallback");
        assert_eq!(
            value,
            json!({"origin": "generic", "detail": {"name": "TypeError"}})
        );
    }

    #[test]
    fn empty_message_counts_as_missing() {
        let event = ErrorEvent::Generic {
            name: "Error".to_string(),
            message: Some(String::new()),
            stack: None,
        };
        assert_eq!(event.message(), None);
        assert_eq!(event.to_string(), "Error");
    }
}
