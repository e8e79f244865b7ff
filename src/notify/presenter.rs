use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::notify::request::{NotificationKind, Payload};

/// Identifies one shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NotificationHandle(Uuid);

impl NotificationHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Renders dismissible notifications and controls their lifetime.
///
/// Dismissing a handle that is no longer open must be a no-op.
pub trait NotificationPresenter: Send + Sync {
    fn show(&self, kind: NotificationKind, payload: &Payload) -> NotificationHandle;
    fn dismiss(&self, handle: NotificationHandle);
    fn dismiss_all(&self);
}

/// An open notification tracked by [`ToastBoard`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub handle: NotificationHandle,
    pub kind: NotificationKind,
    pub payload: Payload,
    pub opened_at: DateTime<Utc>,
}

/// In-memory presenter that keeps the currently open toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastBoard {
    open: Mutex<Vec<Toast>>,
}

impl ToastBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the open toasts.
    pub fn open(&self) -> Vec<Toast> {
        self.with_open(|open| open.clone())
    }

    pub fn open_count(&self) -> usize {
        self.with_open(|open| open.len())
    }

    pub fn is_open(&self, handle: NotificationHandle) -> bool {
        self.with_open(|open| open.iter().any(|toast| toast.handle == handle))
    }

    fn with_open<R>(&self, f: impl FnOnce(&mut Vec<Toast>) -> R) -> R {
        match self.open.lock() {
            Ok(mut guard) => f(&mut *guard),
            Err(poisoned) => {
                warn!("Toast board mutex poisoned; recovering");
                let mut guard = poisoned.into_inner();
                f(&mut *guard)
            }
        }
    }
}

impl NotificationPresenter for ToastBoard {
    fn show(&self, kind: NotificationKind, payload: &Payload) -> NotificationHandle {
        let handle = NotificationHandle::new();
        let toast = Toast {
            handle,
            kind,
            payload: payload.clone(),
            opened_at: Utc::now(),
        };
        self.with_open(|open| open.push(toast));
        debug!(%handle, kind = kind.as_str(), "Toast opened");
        handle
    }

    fn dismiss(&self, handle: NotificationHandle) {
        let removed = self.with_open(|open| {
            let before = open.len();
            open.retain(|toast| toast.handle != handle);
            before != open.len()
        });
        if removed {
            debug!(%handle, "Toast dismissed");
        }
    }

    fn dismiss_all(&self) {
        let cleared = self.with_open(|open| {
            let count = open.len();
            open.clear();
            count
        });
        debug!(cleared, "All toasts dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_tracks_open_toasts_in_order() {
        let board = ToastBoard::new();
        let first = board.show(
            NotificationKind::GeneralMessage,
            &Payload::Message("one".to_string()),
        );
        let second = board.show(
            NotificationKind::FormErrors,
            &Payload::Message("two".to_string()),
        );

        let open = board.open();
        assert_eq!(open.len(), 2);
        assert_eq!(open[0].handle, first);
        assert_eq!(open[1].handle, second);
        assert_eq!(open[1].kind, NotificationKind::FormErrors);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let board = ToastBoard::new();
        let handle = board.show(NotificationKind::GeneralMessage, &Payload::None);
        let other = board.show(NotificationKind::GeneralMessage, &Payload::None);

        board.dismiss(handle);
        board.dismiss(handle);

        assert!(!board.is_open(handle));
        assert!(board.is_open(other));
        assert_eq!(board.open_count(), 1);
    }

    #[test]
    fn dismiss_all_clears_and_later_dismiss_is_noop() {
        let board = ToastBoard::new();
        let handle = board.show(NotificationKind::GeneralMessage, &Payload::None);
        board.show(NotificationKind::GeneralMessage, &Payload::None);

        board.dismiss_all();
        board.dismiss(handle);

        assert_eq!(board.open_count(), 0);
    }

    #[test]
    fn handles_are_unique() {
        assert_ne!(NotificationHandle::new(), NotificationHandle::new());
    }
}
