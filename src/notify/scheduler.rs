use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::notify::error::NotifyError;
use crate::notify::presenter::{NotificationHandle, NotificationPresenter};

/// Pending auto-dismiss for one notification.
///
/// Dropping the timer leaves it running; call [`DismissTimer::cancel`] to stop it.
#[derive(Debug, Clone)]
pub struct DismissTimer {
    handle: NotificationHandle,
    cancel: CancellationToken,
}

impl DismissTimer {
    pub fn new(handle: NotificationHandle) -> Self {
        Self {
            handle,
            cancel: CancellationToken::new(),
        }
    }

    /// Token a scheduler watches to abandon the pending dismissal.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn handle(&self) -> NotificationHandle {
        self.handle
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Defers a dismissal of a shown notification.
pub trait DismissScheduler: Send + Sync {
    fn schedule(&self, handle: NotificationHandle, delay: Duration) -> DismissTimer;
}

/// Runs each dismissal as a tokio task that sleeps for the delay.
pub struct TokioScheduler {
    runtime: Handle,
    presenter: Arc<dyn NotificationPresenter>,
}

impl TokioScheduler {
    pub fn new(runtime: Handle, presenter: Arc<dyn NotificationPresenter>) -> Self {
        Self { runtime, presenter }
    }

    /// Binds to the runtime of the calling context.
    pub fn current(presenter: Arc<dyn NotificationPresenter>) -> Result<Self, NotifyError> {
        let runtime = Handle::try_current().map_err(|err| NotifyError::NoRuntime {
            message: err.to_string(),
        })?;
        Ok(Self::new(runtime, presenter))
    }
}

impl DismissScheduler for TokioScheduler {
    fn schedule(&self, handle: NotificationHandle, delay: Duration) -> DismissTimer {
        let timer = DismissTimer::new(handle);
        let token = timer.cancellation();
        let presenter = Arc::clone(&self.presenter);

        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(%handle, "Auto-dismiss cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    presenter.dismiss(handle);
                }
            }
        });

        timer
    }
}
