//! Error classification and toast notification routing.

pub mod classifier;
pub mod connectivity;
pub mod error;
pub mod event;
pub mod logger;
pub mod notifier;
pub mod presenter;
pub mod request;
pub mod scheduler;

pub use classifier::{ClassifierConfig, ErrorClassifier, clean_stack};
pub use connectivity::{Connectivity, ConnectivityFlag};
pub use error::NotifyError;
pub use event::ErrorEvent;
pub use logger::{ErrorLogger, TracingLogger};
pub use notifier::{Delivery, ErrorNotifier};
pub use presenter::{NotificationHandle, NotificationPresenter, Toast, ToastBoard};
pub use request::{AutoClose, NotificationKind, NotificationRequest, Payload, Route};
pub use scheduler::{DismissScheduler, DismissTimer, TokioScheduler};
