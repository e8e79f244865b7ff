pub mod classify;
pub mod config;
pub mod demo;
pub mod theme;

use std::sync::Arc;

use tracing::warn;

use crate::config::{NotificationsConfig, validate_notifications};
use crate::notify::{
    ClassifierConfig, ConnectivityFlag, ErrorClassifier, ErrorNotifier, NotificationPresenter,
    TokioScheduler, TracingLogger,
};

/// Wires a notifier to `presenter` using the tokio runtime of the caller.
pub(crate) fn build_notifier(
    notifications: &NotificationsConfig,
    presenter: Arc<dyn NotificationPresenter>,
    online: bool,
) -> anyhow::Result<ErrorNotifier> {
    let scheduler = TokioScheduler::current(Arc::clone(&presenter))?;
    Ok(ErrorNotifier::new(
        ErrorClassifier::with_config(checked_classifier_config(notifications)),
        Arc::new(TracingLogger),
        presenter,
        Arc::new(ConnectivityFlag::new(online)),
        Arc::new(scheduler),
    ))
}

/// Invalid notification settings fall back to the defaults as a whole.
fn checked_classifier_config(notifications: &NotificationsConfig) -> ClassifierConfig {
    let validation = validate_notifications(notifications);
    if validation.is_valid() {
        return notifications.classifier_config();
    }

    for error in &validation.errors {
        warn!(field = %error.field, "{}", error.message);
    }
    warn!("Notification settings invalid; using defaults");
    NotificationsConfig::default().classifier_config()
}
