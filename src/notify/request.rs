use std::time::Duration;

use serde::Serialize;

use crate::notify::event::ErrorEvent;

/// Default delay before a toast closes itself.
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(3000);

/// Which toast component renders the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Per-field validation messages.
    FormErrors,
    /// A single message line.
    GeneralMessage,
    /// Nothing is shown.
    Suppressed,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FormErrors => "form_errors",
            Self::GeneralMessage => "general_message",
            Self::Suppressed => "suppressed",
        }
    }
}

/// Data handed to the presenter alongside the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Payload {
    Error(ErrorEvent),
    Message(String),
    None,
}

impl Payload {
    /// Text a plain presenter would display.
    pub fn display_text(&self) -> String {
        match self {
            Self::Error(event) => event.user_message(),
            Self::Message(message) => message.clone(),
            Self::None => String::new(),
        }
    }
}

/// When a shown notification dismisses itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "after_ms", rename_all = "snake_case")]
pub enum AutoClose {
    #[serde(serialize_with = "serialize_millis")]
    After(Duration),
    Never,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(duration.as_millis() as u64)
}

impl Default for AutoClose {
    fn default() -> Self {
        Self::After(DEFAULT_AUTO_CLOSE)
    }
}

/// Classification branch that produced a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "status", rename_all = "snake_case")]
pub enum Route {
    /// HTTP 304, not an actual failure.
    NotModified,
    /// HTTP-origin error while the client reports no connectivity.
    Offline,
    /// HTTP 422.
    FormErrors,
    /// One of the explicitly handled statuses (400, 401, 404, 500).
    KnownStatus(u16),
    /// Any other status, or none at all.
    UnrecognizedStatus(Option<u16>),
    /// Errors that did not come from an HTTP request.
    NonHttp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub payload: Payload,
    pub auto_close: AutoClose,
    pub route: Route,
}

impl NotificationRequest {
    pub fn suppressed(route: Route) -> Self {
        Self {
            kind: NotificationKind::Suppressed,
            payload: Payload::None,
            auto_close: AutoClose::Never,
            route,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.kind == NotificationKind::Suppressed
    }

    pub fn auto_close_after_ms(&self) -> Option<u64> {
        match self.auto_close {
            AutoClose::After(delay) => Some(delay.as_millis() as u64),
            AutoClose::Never => None,
        }
    }
}
