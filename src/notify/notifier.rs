use std::sync::Arc;

use tracing::info;

use crate::notify::classifier::ErrorClassifier;
use crate::notify::connectivity::Connectivity;
use crate::notify::event::ErrorEvent;
use crate::notify::logger::ErrorLogger;
use crate::notify::presenter::{NotificationHandle, NotificationPresenter};
use crate::notify::request::{AutoClose, NotificationRequest};
use crate::notify::scheduler::{DismissScheduler, DismissTimer};

const LOG_PREFIX: &str = "ErrorNotifier: ";

/// Outcome of routing one error.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub request: NotificationRequest,
    /// Present unless the request was suppressed.
    pub handle: Option<NotificationHandle>,
    /// Present when an auto-dismiss was scheduled.
    pub timer: Option<DismissTimer>,
}

/// Terminal sink for application errors.
///
/// Logs every error, classifies it and, unless suppressed, shows a toast and
/// schedules its dismissal. Never fails.
pub struct ErrorNotifier {
    classifier: ErrorClassifier,
    logger: Arc<dyn ErrorLogger>,
    presenter: Arc<dyn NotificationPresenter>,
    connectivity: Arc<dyn Connectivity>,
    scheduler: Arc<dyn DismissScheduler>,
}

impl ErrorNotifier {
    pub fn new(
        classifier: ErrorClassifier,
        logger: Arc<dyn ErrorLogger>,
        presenter: Arc<dyn NotificationPresenter>,
        connectivity: Arc<dyn Connectivity>,
        scheduler: Arc<dyn DismissScheduler>,
    ) -> Self {
        Self {
            classifier,
            logger,
            presenter,
            connectivity,
            scheduler,
        }
    }

    pub fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    pub fn classify_and_notify(&self, error: ErrorEvent) -> Delivery {
        self.logger.error(&format!("{LOG_PREFIX}{error}"));
        if let Some(stack) = self.classifier.filtered_stack(&error) {
            self.logger.debug(&format!("{LOG_PREFIX}{stack}"));
        }

        let request = self
            .classifier
            .classify(&error, self.connectivity.is_online());

        if request.is_suppressed() {
            return Delivery {
                request,
                handle: None,
                timer: None,
            };
        }

        let handle = self.presenter.show(request.kind, &request.payload);
        let timer = match request.auto_close {
            AutoClose::After(delay) => Some(self.scheduler.schedule(handle, delay)),
            AutoClose::Never => None,
        };

        Delivery {
            request,
            handle: Some(handle),
            timer,
        }
    }

    /// Dismisses every open notification immediately.
    pub fn clear_errors(&self) {
        info!("Clearing all error notifications");
        self.presenter.dismiss_all();
    }
}
