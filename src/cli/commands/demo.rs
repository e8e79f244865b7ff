use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::notify::{
    ErrorEvent, NotificationHandle, NotificationKind, NotificationPresenter, Payload, ToastBoard,
};

use super::build_notifier;

/// Slack after the auto-close delay before checking which toasts remain.
const SETTLE_MARGIN: Duration = Duration::from_millis(100);

/// Presenter that prints each lifecycle change before delegating to a board.
struct ConsolePresenter {
    board: ToastBoard,
}

impl NotificationPresenter for ConsolePresenter {
    fn show(&self, kind: NotificationKind, payload: &Payload) -> NotificationHandle {
        let handle = self.board.show(kind, payload);
        println!("[show]    {handle} {:<15} {}", kind.as_str(), payload.display_text());
        handle
    }

    fn dismiss(&self, handle: NotificationHandle) {
        if self.board.is_open(handle) {
            println!("[dismiss] {handle}");
        }
        self.board.dismiss(handle);
    }

    fn dismiss_all(&self) {
        println!("[clear]   {} open", self.board.open_count());
        self.board.dismiss_all();
    }
}

pub fn sample_errors() -> Vec<ErrorEvent> {
    vec![
        ErrorEvent::from_status(304, "Not Modified"),
        ErrorEvent::from_status(422, "Invalid name"),
        ErrorEvent::from_status(500, "Internal Server Error"),
        ErrorEvent::LibraryRequest {
            status: Some(401),
            message: "Bad credentials".to_string(),
            stack: None,
        },
        ErrorEvent::from_status(418, "I'm a teapot"),
        ErrorEvent::generic("boom").with_stack(
            "Error: boom\n    at node_modules/zone.js/dist/zone.js:1\n    at src/app/app.ts:12",
        ),
        ErrorEvent::from("plain string failure"),
    ]
}

pub async fn handle_demo(
    offline: bool,
    auto_close_ms: Option<u64>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut notifications = config.notifications.clone();
    if let Some(ms) = auto_close_ms {
        notifications.auto_close_ms = ms;
    }

    let presenter = Arc::new(ConsolePresenter {
        board: ToastBoard::new(),
    });
    let notifier = build_notifier(&notifications, presenter.clone(), !offline)?;

    for event in sample_errors() {
        let delivery = notifier.classify_and_notify(event);
        if delivery.request.is_suppressed() {
            println!("[skip]    {:?}", delivery.request.route);
        }
    }

    tokio::time::sleep(Duration::from_millis(notifications.auto_close_ms) + SETTLE_MARGIN).await;

    let remaining = presenter.board.open_count();
    println!("{remaining} toast(s) still open after auto-close");
    notifier.clear_errors();
    Ok(())
}
